//! Search for the network path(s) matching a street segment description
//!
//! A segment arrives as a primary street plus the two cross streets that
//! bound it ("Market St between Mount and Point"). Resolution scans the
//! whole network for links on the primary street, confirms intersections
//! with the cross streets through the incident links of each end node, and
//! falls back to distance-weighted routing between the recorded
//! intersection nodes when the segment spans more than one link.

use itertools::Itertools;
use log::debug;
use petgraph::Direction::{Incoming, Outgoing};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::NodeId;
use crate::matching::{StreetDescription, link_matches};
use crate::model::StreetNetwork;
use crate::routing::dijkstra;

/// A walk through the network: at least two node ids, each consecutive
/// pair a directed link. Produced fresh per resolver call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCandidate {
    nodes: Vec<NodeId>,
}

impl PathCandidate {
    /// # Panics
    ///
    /// A path candidate needs at least two nodes.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        assert!(nodes.len() >= 2, "a path candidate needs at least two nodes");
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// First and last node of the walk
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.nodes[0], self.nodes[self.nodes.len() - 1])
    }

    /// Consecutive (A, B) node pairs, one per traversed link
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().copied().tuple_windows()
    }
}

/// Search for the network path(s) on the `primary` street between
/// `cross1` and `cross2`.
///
/// Every link whose stored name/type fuzzy-matches the primary street is
/// examined; a link both of whose end nodes are confirmed intersections
/// with the cross streets is a direct match. A bidirectional segment
/// yields two direct matches (one per direction), a one-way segment one.
/// When no link spans both intersections directly but both intersections
/// were seen somewhere along the primary street, the segment spans several
/// links: the recorded intersection nodes are paired up and the
/// distance-weighted shortest path between each pair (in both orders, the
/// street may be one-way) is kept when every link along it also matches
/// the primary street.
///
/// An unmatched description yields an empty list, not an error. Multiple
/// plausible paths are a valid, expected result for the caller to narrow
/// down, e.g. with [`crate::routing::select_by_direction`].
pub fn find_paths(
    network: &StreetNetwork,
    primary: &StreetDescription,
    cross1: &StreetDescription,
    cross2: &StreetDescription,
) -> Vec<PathCandidate> {
    // nodes where the primary street meets cross street 1 / 2
    let mut cross1_nodes: Vec<NodeIndex> = Vec::new();
    let mut cross2_nodes: Vec<NodeIndex> = Vec::new();
    let mut paths_found: Vec<PathCandidate> = Vec::new();

    let graph = &network.graph;
    for edge in graph.edge_references() {
        if !link_matches(edge.weight(), primary, true) {
            continue;
        }
        let mut cross1_found = false;
        let mut cross2_found = false;
        // Check the in- and out-links of both end nodes against the cross
        // streets. A two-way road is encoded as two opposing links and a
        // one-way road as one, so a cross street can surface on either
        // side of its intersection node; in- and out-links are walked
        // separately. A node is recorded once per matching incident link.
        for node in [edge.source(), edge.target()] {
            for incident in graph
                .edges_directed(node, Incoming)
                .chain(graph.edges_directed(node, Outgoing))
            {
                if link_matches(incident.weight(), cross1, true) {
                    cross1_found = true;
                    cross1_nodes.push(node);
                }
                if link_matches(incident.weight(), cross2, true) {
                    cross2_found = true;
                    cross2_nodes.push(node);
                }
            }
        }
        if cross1_found && cross2_found {
            // both ends of this link are confirmed intersections
            paths_found.push(PathCandidate::new(vec![
                network.node_id(edge.source()),
                network.node_id(edge.target()),
            ]));
        }
    }

    if !paths_found.is_empty() {
        return paths_found;
    }
    if cross1_nodes.is_empty() || cross2_nodes.is_empty() {
        return paths_found;
    }

    // The segment is not a single link, but both intersections were seen,
    // so it spans several links: route between the intersection nodes by
    // distance and keep a path only if it stays on the primary street.
    // With several loosely-matching intersection nodes this can produce a
    // combinatorial number of candidates; that is a documented limitation,
    // not an error.
    let cross1_nodes: Vec<NodeIndex> = cross1_nodes.into_iter().unique().collect();
    let cross2_nodes: Vec<NodeIndex> = cross2_nodes.into_iter().unique().collect();
    debug!(
        "no direct link found; routing between {}x{} intersection candidates",
        cross1_nodes.len(),
        cross2_nodes.len()
    );
    for (a, b) in cross1_nodes.iter().cartesian_product(cross2_nodes.iter()) {
        for (start, goal) in [(*a, *b), (*b, *a)] {
            if start == goal {
                continue;
            }
            let Some(path) = dijkstra::shortest_path_indices(network, start, goal) else {
                continue;
            };
            let on_primary = path.iter().copied().tuple_windows().all(|(u, v)| {
                network.any_link_connecting(u, v, |link| link_matches(link, primary, true))
            });
            if on_primary {
                paths_found.push(PathCandidate::new(
                    path.into_iter()
                        .map(|index| network.node_id(index))
                        .collect(),
                ));
            }
        }
    }
    paths_found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StreetLink, StreetNode};

    fn street(name: &str, street_type: &str, distance: f64) -> StreetLink {
        StreetLink::new(Some(name.into()), Some(street_type.into()), distance)
    }

    fn two_way(
        links: &mut Vec<(NodeId, NodeId, StreetLink)>,
        a: NodeId,
        b: NodeId,
        link: StreetLink,
    ) {
        links.push((a, b, link.clone()));
        links.push((b, a, link));
    }

    /// Market St runs 1 - 2, 1st St crosses at node 1, 2nd St at node 2.
    fn diamond_network() -> StreetNetwork {
        let nodes = vec![
            StreetNode::new(1, 0.0, 0.0),
            StreetNode::new(2, 1.0, 0.0),
            StreetNode::new(3, 0.0, 1.0),
            StreetNode::new(4, 1.0, 1.0),
        ];
        let mut links = Vec::new();
        two_way(&mut links, 1, 2, street("MARKET", "ST", 1.0));
        two_way(&mut links, 3, 1, street("1ST", "ST", 1.0));
        two_way(&mut links, 2, 4, street("2ND", "ST", 1.0));
        StreetNetwork::from_tables(nodes, links).unwrap()
    }

    /// Market St spans 1 - 5 - 2 with the middle link named `mid_name`;
    /// the cross streets only touch the outer nodes 1 and 2.
    fn split_segment_network(mid_name: &str) -> StreetNetwork {
        let nodes = vec![
            StreetNode::new(1, 0.0, 0.0),
            StreetNode::new(5, 1.0, 0.0),
            StreetNode::new(2, 2.0, 0.0),
            StreetNode::new(3, 0.0, 1.0),
            StreetNode::new(4, 2.0, 1.0),
        ];
        let mut links = Vec::new();
        two_way(&mut links, 1, 5, street("MARKET", "ST", 1.0));
        two_way(&mut links, 5, 2, street(mid_name, "ST", 1.0));
        two_way(&mut links, 3, 1, street("1ST", "ST", 1.0));
        two_way(&mut links, 2, 4, street("2ND", "ST", 1.0));
        StreetNetwork::from_tables(nodes, links).unwrap()
    }

    fn market_between_1st_and_2nd(network: &StreetNetwork) -> Vec<PathCandidate> {
        find_paths(
            network,
            &StreetDescription::new("Market", "St"),
            &StreetDescription::name_only("1st"),
            &StreetDescription::name_only("2nd"),
        )
    }

    #[test]
    fn bidirectional_segment_yields_two_direct_paths() {
        let network = diamond_network();
        let paths = market_between_1st_and_2nd(&network);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), &[1, 2]);
        assert_eq!(paths[1].nodes(), &[2, 1]);
    }

    #[test]
    fn one_way_segment_yields_one_direct_path() {
        let nodes = vec![
            StreetNode::new(1, 0.0, 0.0),
            StreetNode::new(2, 1.0, 0.0),
            StreetNode::new(3, 0.0, 1.0),
            StreetNode::new(4, 1.0, 1.0),
        ];
        let mut links = vec![(1, 2, street("MARKET", "ST", 1.0))];
        two_way(&mut links, 3, 1, street("1ST", "ST", 1.0));
        two_way(&mut links, 2, 4, street("2ND", "ST", 1.0));
        let network = StreetNetwork::from_tables(nodes, links).unwrap();
        let paths = market_between_1st_and_2nd(&network);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[1, 2]);
    }

    #[test]
    fn multi_link_segment_falls_back_to_shortest_path() {
        let network = split_segment_network("MARKET");
        let paths = market_between_1st_and_2nd(&network);
        assert_eq!(paths.len(), 2);
        let mut node_lists: Vec<&[NodeId]> = paths.iter().map(PathCandidate::nodes).collect();
        node_lists.sort();
        assert_eq!(node_lists, vec![&[1, 5, 2][..], &[2, 5, 1][..]]);
    }

    #[test]
    fn fallback_rejects_paths_leaving_the_primary_street() {
        let network = split_segment_network("SAFEWAY DRIVEWAY");
        // The 2nd St intersection is never recorded (no primary link
        // touches node 2), so nothing is found at all.
        assert!(market_between_1st_and_2nd(&network).is_empty());
    }

    #[test]
    fn fallback_rejects_detours_off_the_primary_street() {
        // Both intersections exist on Market links, but the only route
        // between them passes over a differently-named middle link.
        let nodes = vec![
            StreetNode::new(1, 0.0, 0.0),
            StreetNode::new(5, 1.0, 0.0),
            StreetNode::new(6, 2.0, 0.0),
            StreetNode::new(2, 3.0, 0.0),
            StreetNode::new(3, 0.0, 1.0),
            StreetNode::new(4, 3.0, 1.0),
        ];
        let mut links = Vec::new();
        two_way(&mut links, 1, 5, street("MARKET", "ST", 1.0));
        two_way(&mut links, 5, 6, street("SAFEWAY DRIVEWAY", "ST", 1.0));
        two_way(&mut links, 6, 2, street("MARKET", "ST", 1.0));
        two_way(&mut links, 3, 1, street("1ST", "ST", 1.0));
        two_way(&mut links, 2, 4, street("2ND", "ST", 1.0));
        let network = StreetNetwork::from_tables(nodes, links).unwrap();
        assert!(market_between_1st_and_2nd(&network).is_empty());
    }

    #[test]
    fn unmatched_primary_name_yields_no_paths() {
        let network = diamond_network();
        let paths = find_paths(
            &network,
            &StreetDescription::new("Mission", "St"),
            &StreetDescription::name_only("1st"),
            &StreetDescription::name_only("2nd"),
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn resolution_is_idempotent_and_order_stable() {
        let network = split_segment_network("MARKET");
        let first = market_between_1st_and_2nd(&network);
        let second = market_between_1st_and_2nd(&network);
        assert_eq!(first, second);
    }

    #[test]
    fn path_candidate_exposes_links_and_endpoints() {
        let path = PathCandidate::new(vec![1, 5, 2]);
        assert_eq!(path.endpoints(), (1, 2));
        assert_eq!(path.links().collect::<Vec<_>>(), vec![(1, 5), (5, 2)]);
    }
}
