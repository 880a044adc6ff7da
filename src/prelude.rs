// Re-export key components
pub use crate::batch::{BatchReport, ResolvedSegment, SegmentQuery, SkippedQueries, resolve_segments};
pub use crate::loading::{NetworkConfig, load_street_network};
pub use crate::matching::{
    StreetDescription, edge_matches, link_matches, names_match, normalize_street_name,
    normalize_street_type, street_descriptions_match,
};
pub use crate::model::{StreetLink, StreetNetwork, StreetNode};
pub use crate::routing::{Direction, PathCandidate, find_paths, select_by_direction, shortest_path};

// Core types for the street network
pub use crate::Distance;
pub use crate::NodeId;

pub use crate::Error;
