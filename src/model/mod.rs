//! Data model for the road network
//!
//! Contains the node/link components and the directed graph they form.

pub mod streets;

// Re-export of basic types for convenience
pub use streets::{StreetLink, StreetNetwork, StreetNode};
