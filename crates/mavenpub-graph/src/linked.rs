//! Adjacency-list backend on top of petgraph's `StableDiGraph`.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::error::GraphError;
use crate::graph::{Connection, EdgeId, Graph, NodeId};

/// A graph where every node keeps a list of its connections.
///
/// Ids stay valid across removals of other nodes; the slot of a removed
/// node may be handed out again by a later [`Graph::add_node`].
#[derive(Debug, Clone)]
pub struct LinkedGraph<N, W> {
    inner: StableDiGraph<N, W>,
}

impl<N, W> Default for LinkedGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> LinkedGraph<N, W> {
    pub fn new() -> Self {
        Self {
            inner: StableDiGraph::new(),
        }
    }

    fn to_conn(&self, edge: EdgeIndex) -> Option<Connection<'_, W>> {
        let (from, to) = self.inner.edge_endpoints(edge)?;
        Some(Connection {
            id: EdgeId(edge.index()),
            from: NodeId(from.index()),
            to: NodeId(to.index()),
            way: self.inner.edge_weight(edge)?,
        })
    }
}

impl<N, W> Graph<N, W> for LinkedGraph<N, W> {
    fn add_node(&mut self, data: N) -> NodeId {
        NodeId(self.inner.add_node(data).index())
    }

    fn remove_node(&mut self, id: NodeId) -> Option<N> {
        self.inner.remove_node(NodeIndex::new(id.0))
    }

    fn connect(&mut self, from: NodeId, to: NodeId, way: W) -> Result<EdgeId, GraphError> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        let edge = self
            .inner
            .add_edge(NodeIndex::new(from.0), NodeIndex::new(to.0), way);
        Ok(EdgeId(edge.index()))
    }

    fn disconnect(&mut self, edge: EdgeId) -> Option<W> {
        self.inner.remove_edge(EdgeIndex::new(edge.0))
    }

    fn node(&self, id: NodeId) -> Option<&N> {
        self.inner.node_weight(NodeIndex::new(id.0))
    }

    fn connection(&self, edge: EdgeId) -> Result<Connection<'_, W>, GraphError> {
        self.to_conn(EdgeIndex::new(edge.0))
            .ok_or(GraphError::UnknownConnection(edge))
    }

    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .inner
            .node_indices()
            .map(|idx| NodeId(idx.index()))
            .collect();
        ids.sort();
        ids
    }

    fn connections(&self) -> Vec<Connection<'_, W>> {
        let mut conns: Vec<Connection<'_, W>> = self
            .inner
            .edge_indices()
            .filter_map(|edge| self.to_conn(edge))
            .collect();
        conns.sort_by_key(|c| (c.from, c.id));
        conns
    }

    fn connections_from(&self, id: NodeId) -> Vec<Connection<'_, W>> {
        let idx = NodeIndex::new(id.0);
        if !self.inner.contains_node(idx) {
            return Vec::new();
        }
        let mut conns: Vec<Connection<'_, W>> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| Connection {
                id: EdgeId(e.id().index()),
                from: id,
                to: NodeId(e.target().index()),
                way: e.weight(),
            })
            .collect();
        conns.sort_by_key(|c| c.id);
        conns
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn connection_count(&self) -> usize {
        self.inner.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_node_drops_incident_connections() {
        let mut g = LinkedGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.connect(a, b, 1).unwrap();
        g.connect(b, c, 2).unwrap();
        g.connect(c, a, 3).unwrap();

        assert_eq!(g.remove_node(b), Some("b"));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.connection_count(), 1);
        assert!(g.connections_from(a).is_empty());
        assert_eq!(g.connections_from(c)[0].to, a);
    }

    #[test]
    fn connect_unknown_node_fails() {
        let mut g: LinkedGraph<&str, u32> = LinkedGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.remove_node(b);
        assert_eq!(g.connect(a, b, 1), Err(GraphError::UnknownNode(b)));
    }
}
