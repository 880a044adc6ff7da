//! Street-name-based road segment resolver.
//!
//! Given a human-written description of a road segment ("Market St between
//! Mount and Point"), locates the corresponding directed path(s) in a road
//! network exported from a regional travel-demand model. The network is
//! loaded once from a pair of tabular sources (links and nodes) into an
//! in-memory directed graph; resolution is a pure query against that graph.
//!
//! The main entry points are [`loading::load_street_network`],
//! [`routing::find_paths`] and [`routing::select_by_direction`]. Bulk
//! callers processing many descriptions can use [`batch::resolve_segments`],
//! which keeps a per-item skip ledger instead of halting on failures.

pub mod batch;
pub mod error;
pub mod loading;
pub mod matching;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Node identifier as assigned in the source network tables
pub type NodeId = i64;

/// Link length in the distance units of the source network
pub type Distance = f64;
