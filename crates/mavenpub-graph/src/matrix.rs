//! Adjacency-matrix backend.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::{Connection, EdgeId, Graph, NodeId};

/// A graph stored as a square matrix of connection lists.
///
/// Cell `(from, to)` holds every way from `from` to `to` in insertion order.
/// The matrix side doubles whenever a node index falls outside it. Node ids
/// are never reused.
#[derive(Debug, Clone)]
pub struct MatrixGraph<N, W> {
    nodes: Vec<Option<N>>,
    cells: Vec<Vec<Vec<(EdgeId, W)>>>,
    edges: HashMap<EdgeId, (usize, usize)>,
    next_edge: usize,
}

impl<N, W> Default for MatrixGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> MatrixGraph<N, W> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            cells: vec![vec![Vec::new()]],
            edges: HashMap::new(),
            next_edge: 0,
        }
    }

    /// Current side length of the matrix.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn grow_to_fit(&mut self, index: usize) {
        let mut side = self.cells.len();
        if index < side {
            return;
        }
        while side <= index {
            side *= 2;
        }
        tracing::trace!("Growing adjacency matrix to {side}x{side}");
        for row in &mut self.cells {
            row.resize_with(side, Vec::new);
        }
        self.cells.resize_with(side, || {
            std::iter::repeat_with(Vec::new).take(side).collect()
        });
    }

    fn cell_connections(&self, from: usize, to: usize) -> impl Iterator<Item = Connection<'_, W>> {
        self.cells[from][to].iter().map(move |(id, way)| Connection {
            id: *id,
            from: NodeId(from),
            to: NodeId(to),
            way,
        })
    }
}

impl<N, W> Graph<N, W> for MatrixGraph<N, W> {
    fn add_node(&mut self, data: N) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(Some(data));
        self.grow_to_fit(index);
        NodeId(index)
    }

    fn remove_node(&mut self, id: NodeId) -> Option<N> {
        let data = self.nodes.get_mut(id.0)?.take()?;
        let side = self.cells.len();
        for other in 0..side {
            for (edge, _) in self.cells[id.0][other].drain(..) {
                self.edges.remove(&edge);
            }
            for (edge, _) in self.cells[other][id.0].drain(..) {
                self.edges.remove(&edge);
            }
        }
        Some(data)
    }

    fn connect(&mut self, from: NodeId, to: NodeId, way: W) -> Result<EdgeId, GraphError> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        self.grow_to_fit(from.0.max(to.0));
        let edge = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.cells[from.0][to.0].push((edge, way));
        self.edges.insert(edge, (from.0, to.0));
        Ok(edge)
    }

    fn disconnect(&mut self, edge: EdgeId) -> Option<W> {
        let (from, to) = self.edges.remove(&edge)?;
        let ways = &mut self.cells[from][to];
        let pos = ways.iter().position(|(id, _)| *id == edge)?;
        Some(ways.remove(pos).1)
    }

    fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id.0)?.as_ref()
    }

    fn connection(&self, edge: EdgeId) -> Result<Connection<'_, W>, GraphError> {
        let &(from, to) = self
            .edges
            .get(&edge)
            .ok_or(GraphError::UnknownConnection(edge))?;
        self.cell_connections(from, to)
            .find(|c| c.id == edge)
            .ok_or(GraphError::UnknownConnection(edge))
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn connections(&self) -> Vec<Connection<'_, W>> {
        self.node_ids()
            .into_iter()
            .flat_map(|id| self.connections_from(id))
            .collect()
    }

    fn connections_from(&self, id: NodeId) -> Vec<Connection<'_, W>> {
        if !self.contains(id) {
            return Vec::new();
        }
        (0..self.nodes.len())
            .flat_map(|to| self.cell_connections(id.0, to))
            .collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    fn connection_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_grows_by_doubling() {
        let mut g: MatrixGraph<u32, ()> = MatrixGraph::new();
        assert_eq!(g.capacity(), 1);
        g.add_node(0);
        g.add_node(1);
        assert_eq!(g.capacity(), 2);
        g.add_node(2);
        assert_eq!(g.capacity(), 4);
        for i in 3..5 {
            g.add_node(i);
        }
        assert_eq!(g.capacity(), 8);
    }

    #[test]
    fn parallel_ways_keep_insertion_order() {
        let mut g = MatrixGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let first = g.connect(a, b, "x").unwrap();
        g.connect(a, b, "y").unwrap();
        let ways: Vec<&str> = g.connections_from(a).iter().map(|c| *c.way).collect();
        assert_eq!(ways, vec!["x", "y"]);

        assert_eq!(g.disconnect(first), Some("x"));
        assert_eq!(g.disconnect(first), None);
        assert_eq!(g.connection(first).unwrap_err(), GraphError::UnknownConnection(first));
        assert_eq!(g.connection_count(), 1);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut g: MatrixGraph<&str, u8> = MatrixGraph::new();
        let a = g.add_node("a");
        g.remove_node(a);
        let b = g.add_node("b");
        assert_ne!(a, b);
        assert!(g.node(a).is_none());
        assert_eq!(g.node_ids(), vec![b]);
    }
}
