//! Directed street network graph

use hashbrown::HashMap;
use petgraph::Direction::{Incoming, Outgoing};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{StreetLink, StreetNode};
use crate::{Error, NodeId};

/// Directed street network with links attributed by street name and type.
///
/// Built once from the source tables and read-only afterwards. Parallel
/// links between the same ordered node pair are kept (divided roadways).
#[derive(Debug, Clone, Default)]
pub struct StreetNetwork {
    pub(crate) graph: DiGraph<StreetNode, StreetLink>,
    node_ids: HashMap<NodeId, NodeIndex>,
}

impl StreetNetwork {
    /// Assemble a network from already-parsed node and link rows.
    ///
    /// Links are inserted in the given order, which fixes the iteration
    /// order of [`Self::links`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if a link references a node id that
    /// is missing from the node table.
    pub fn from_tables(
        nodes: Vec<StreetNode>,
        links: Vec<(NodeId, NodeId, StreetLink)>,
    ) -> Result<Self, Error> {
        let mut graph = DiGraph::with_capacity(nodes.len(), links.len());
        let mut node_ids = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id;
            let index = graph.add_node(node);
            node_ids.insert(id, index);
        }
        for (from, to, link) in links {
            let a = *node_ids.get(&from).ok_or(Error::UnknownNode(from))?;
            let b = *node_ids.get(&to).ok_or(Error::UnknownNode(to))?;
            graph.add_edge(a, b, link);
        }
        Ok(Self { graph, node_ids })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node attributes by source-table id
    pub fn node(&self, id: NodeId) -> Option<&StreetNode> {
        self.node_index(id).map(|index| &self.graph[index])
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_ids.get(&id).copied()
    }

    pub(crate) fn node_id(&self, index: NodeIndex) -> NodeId {
        self.graph[index].id
    }

    /// All links in input-table order as `(from, to, link)`
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, &StreetLink)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight(),
            )
        })
    }

    /// Links arriving at `node`; empty if the id is unknown
    pub fn in_links(&self, node: NodeId) -> impl Iterator<Item = (NodeId, NodeId, &StreetLink)> + '_ {
        self.node_index(node).into_iter().flat_map(move |index| {
            self.graph.edges_directed(index, Incoming).map(|edge| {
                (
                    self.graph[edge.source()].id,
                    self.graph[edge.target()].id,
                    edge.weight(),
                )
            })
        })
    }

    /// Links leaving `node`; empty if the id is unknown
    pub fn out_links(&self, node: NodeId) -> impl Iterator<Item = (NodeId, NodeId, &StreetLink)> + '_ {
        self.node_index(node).into_iter().flat_map(move |index| {
            self.graph.edges_directed(index, Outgoing).map(|edge| {
                (
                    self.graph[edge.source()].id,
                    self.graph[edge.target()].id,
                    edge.weight(),
                )
            })
        })
    }

    /// First link stored for the ordered node pair, if any
    pub fn link_between(&self, from: NodeId, to: NodeId) -> Option<&StreetLink> {
        let a = self.node_index(from)?;
        let b = self.node_index(to)?;
        self.graph
            .edges_connecting(a, b)
            .next()
            .map(|edge| edge.weight())
    }

    /// Whether any parallel link for the ordered pair satisfies `pred`
    pub(crate) fn any_link_connecting(
        &self,
        a: NodeIndex,
        b: NodeIndex,
        mut pred: impl FnMut(&StreetLink) -> bool,
    ) -> bool {
        self.graph
            .edges_connecting(a, b)
            .any(|edge| pred(edge.weight()))
    }
}
