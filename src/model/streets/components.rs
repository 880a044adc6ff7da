//! Street network components - nodes and links

use geo::Point;
use hashbrown::HashMap;

use crate::{Distance, NodeId};

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// Node number from the source node table
    pub id: NodeId,
    /// Planar node coordinates
    pub geometry: Point<f64>,
    /// Remaining node-table columns, retained verbatim
    pub attrs: HashMap<String, String>,
}

impl StreetNode {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            geometry: Point::new(x, y),
            attrs: HashMap::new(),
        }
    }
}

/// Street graph link (directed road segment)
///
/// Bidirectional streets are stored as two opposing links, one-way streets
/// as a single link. Name and type may be absent (ramps, dummy links).
#[derive(Debug, Clone, Default)]
pub struct StreetLink {
    /// Specific street name, e.g. "MARKET"
    pub street_name: Option<String>,
    /// Street type, e.g. "ST" or "AVE"
    pub street_type: Option<String>,
    /// Link length, used as the shortest-path weight
    pub distance: Distance,
    /// Remaining link-table columns, retained verbatim
    pub attrs: HashMap<String, String>,
}

impl StreetLink {
    pub fn new(
        street_name: Option<String>,
        street_type: Option<String>,
        distance: Distance,
    ) -> Self {
        Self {
            street_name,
            street_type,
            distance,
            attrs: HashMap::new(),
        }
    }
}
