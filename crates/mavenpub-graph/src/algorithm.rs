//! Search algorithms over any [`Graph`] backend.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Connection, Graph, NodeId};
use crate::path::{Path, PathStep};

/// A computation over a graph, run with [`Graph::search`].
pub trait Algorithm<N, W> {
    type Output;

    fn run(&self, graph: &dyn Graph<N, W>) -> Self::Output;
}

/// Cheapest path from `start` to `target`, with per-way costs from `weight`.
///
/// Yields `None` when the target cannot be reached (or either node is
/// unknown) and an empty path when `start == target`.
pub struct Dijkstra<F> {
    pub start: NodeId,
    pub target: NodeId,
    pub weight: F,
}

impl<F> Dijkstra<F> {
    pub fn new(start: NodeId, target: NodeId, weight: F) -> Self {
        Self {
            start,
            target,
            weight,
        }
    }
}

impl<N, W, F> Algorithm<N, W> for Dijkstra<F>
where
    N: Clone,
    W: Clone,
    F: Fn(&W) -> u64,
{
    type Output = Option<Path<N, W>>;

    fn run(&self, graph: &dyn Graph<N, W>) -> Option<Path<N, W>> {
        if !graph.contains(self.start) || !graph.contains(self.target) {
            return None;
        }

        let mut dist: HashMap<NodeId, u64> = HashMap::from([(self.start, 0)]);
        let mut via: HashMap<NodeId, Connection<'_, W>> = HashMap::new();
        let mut heap = BinaryHeap::from([Reverse((0u64, self.start))]);

        while let Some(Reverse((cost, node))) = heap.pop() {
            if node == self.target {
                return Some(build_path(graph, self.start, self.target, cost, &via));
            }
            if dist.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            for conn in graph.connections_from(node) {
                let next = cost.saturating_add((self.weight)(conn.way));
                if dist.get(&conn.to).map_or(true, |&best| next < best) {
                    dist.insert(conn.to, next);
                    via.insert(conn.to, conn);
                    heap.push(Reverse((next, conn.to)));
                }
            }
        }
        None
    }
}

fn build_path<N: Clone, W: Clone>(
    graph: &dyn Graph<N, W>,
    start: NodeId,
    target: NodeId,
    cost: u64,
    via: &HashMap<NodeId, Connection<'_, W>>,
) -> Path<N, W> {
    let mut steps = Vec::new();
    let mut current = target;
    while current != start {
        let Some(conn) = via.get(&current) else {
            break;
        };
        if let (Some(from), Some(to)) = (graph.node(conn.from), graph.node(conn.to)) {
            steps.push(PathStep {
                from: conn.from,
                from_data: from.clone(),
                way: conn.way.clone(),
                to: conn.to,
                to_data: to.clone(),
            });
        }
        current = conn.from;
    }
    steps.reverse();
    Path::new(start, steps, cost)
}
