use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::NodeId;
use crate::model::StreetNetwork;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: OrderedFloat<f64>,
    node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance-weighted shortest path between two nodes.
///
/// Returns the node sequence from `from` to `to`, or `None` when either id
/// is unknown or `to` is unreachable.
pub fn shortest_path(network: &StreetNetwork, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    let start = network.node_index(from)?;
    let target = network.node_index(to)?;
    shortest_path_indices(network, start, target)
        .map(|path| path.into_iter().map(|index| network.node_id(index)).collect())
}

/// Dijkstra's algorithm over the link distance weights, tracing
/// predecessors so the path itself can be reconstructed
pub(crate) fn shortest_path_indices(
    network: &StreetNetwork,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let graph = &network.graph;
    // Estimate capacity based on graph size (adjust as needed)
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, OrderedFloat<f64>> =
        HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: start,
    });
    distances.insert(start, OrderedFloat(0.0));

    while let Some(State { cost, node }) = heap.pop() {
        // Check if we've reached the target
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + OrderedFloat(edge.weight().distance);

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    if target != start && !predecessors.contains_key(&target) {
        return None;
    }

    // Follow predecessors backward from target to start
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse(); // Now path is from start to target
    Some(path)
}
