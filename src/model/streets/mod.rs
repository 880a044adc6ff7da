//! Street network model

pub mod components;
pub mod network;

pub use components::{StreetLink, StreetNode};
pub use network::StreetNetwork;
