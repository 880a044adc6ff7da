use thiserror::Error;

use crate::NodeId;
use crate::routing::Direction;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no candidate path runs {0}")]
    DirectionNotFound(Direction),
    #[error("nodes {first} and {last} share the same {axis} coordinate")]
    DegenerateGeometry {
        first: NodeId,
        last: NodeId,
        axis: &'static str,
    },
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
