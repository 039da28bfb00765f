use crate::graph::store::GraphStore;
use crate::graph::types::{Edge, NodeId};

/// Read-only view of adjacency used by the path engine
pub trait GraphProvider {
    fn contains_node(&self, id: NodeId) -> bool;
    fn node_ids(&self) -> Vec<NodeId>;
    fn outgoing_edges(&self, id: NodeId) -> Vec<&Edge>;
}

impl GraphProvider for GraphStore {
    fn contains_node(&self, id: NodeId) -> bool {
        GraphStore::contains_node(self, id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }

    fn outgoing_edges(&self, id: NodeId) -> Vec<&Edge> {
        self.outgoing(id).unwrap_or_default()
    }
}
