//! Street name normalization and matching

pub mod normalize;
pub mod streets;

pub use normalize::{names_match, normalize_street_name, normalize_street_type};
pub use streets::{StreetDescription, edge_matches, link_matches, street_descriptions_match};
