//! The [`Graph`] trait shared by every backend.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::algorithm::Algorithm;
use crate::error::GraphError;

/// Handle to a node. Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle to a connection. Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed connection borrowed from a graph.
#[derive(Debug)]
pub struct Connection<'a, W> {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub way: &'a W,
}

impl<W> Clone for Connection<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Connection<'_, W> {}

/// A directed multigraph: any number of connections, each carrying way data,
/// may run between the same pair of nodes.
pub trait Graph<N, W> {
    fn add_node(&mut self, data: N) -> NodeId;

    /// Remove a node together with every connection into or out of it.
    fn remove_node(&mut self, id: NodeId) -> Option<N>;

    fn connect(&mut self, from: NodeId, to: NodeId, way: W) -> Result<EdgeId, GraphError>;

    fn disconnect(&mut self, edge: EdgeId) -> Option<W>;

    fn node(&self, id: NodeId) -> Option<&N>;

    fn connection(&self, edge: EdgeId) -> Result<Connection<'_, W>, GraphError>;

    /// Live node ids in ascending order.
    fn node_ids(&self) -> Vec<NodeId>;

    fn connections(&self) -> Vec<Connection<'_, W>>;

    /// Outgoing connections of `id`; empty for an unknown node.
    fn connections_from(&self, id: NodeId) -> Vec<Connection<'_, W>>;

    fn node_count(&self) -> usize;

    fn connection_count(&self) -> usize {
        self.connections().len()
    }

    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Nodes reachable from `start` following connection direction,
    /// breadth-first, starting with `start` itself.
    fn reachable(&self, start: NodeId) -> Vec<NodeId> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut seen = HashSet::from([start]);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for conn in self.connections_from(current) {
                if seen.insert(conn.to) {
                    order.push(conn.to);
                    queue.push_back(conn.to);
                }
            }
        }
        order
    }

    /// Run a search algorithm over this graph.
    fn search<A>(&self, algorithm: &A) -> A::Output
    where
        A: Algorithm<N, W>,
        Self: Sized,
    {
        algorithm.run(self)
    }
}
