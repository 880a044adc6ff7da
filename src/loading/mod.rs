//! This module is responsible for loading the link and node tables and
//! building the street network model.

mod builder;
mod config;
mod de;
mod raw_types;

pub use builder::load_street_network;
pub use config::NetworkConfig;
pub use raw_types::{RawLink, RawNode};
