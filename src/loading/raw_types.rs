use serde::Deserialize;

use super::de::empty_as_none;
use crate::{Distance, NodeId};

/// Known link-table columns (travel-model freeflow export convention);
/// everything else passes through as string attributes
pub(super) const LINK_COLUMNS: &[&str] = &["A", "B", "STREETNAME", "TYPE", "DISTANCE"];

/// Known node-table columns
pub(super) const NODE_COLUMNS: &[&str] = &["N", "X", "Y"];

#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    #[serde(rename = "A")]
    pub from_node: NodeId,
    #[serde(rename = "B")]
    pub to_node: NodeId,
    #[serde(rename = "STREETNAME", default, deserialize_with = "empty_as_none")]
    pub street_name: Option<String>,
    #[serde(rename = "TYPE", default, deserialize_with = "empty_as_none")]
    pub street_type: Option<String>,
    #[serde(rename = "DISTANCE")]
    pub distance: Distance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(rename = "N")]
    pub id: NodeId,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}
