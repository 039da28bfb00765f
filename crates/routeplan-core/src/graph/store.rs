//! In-memory graph store
//!
//! Edges live in a single arena (`Vec<Edge>`, creation order). Each node's
//! adjacency is a list of handles into that arena, so there is exactly one
//! owner of every edge.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::bail_unknown_node;
use crate::error::{Result, RouteError};
use crate::graph::types::{Edge, EdgeId, NodeId, Weights};

/// Nodes and directed weighted edges of a route network
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: BTreeMap<NodeId, Vec<EdgeId>>,
    edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Re-registering an existing id is rejected and leaves
    /// the node's outgoing edges untouched.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return Err(RouteError::DuplicateNode { id });
        }
        self.adjacency.insert(id, Vec::new());
        trace!(node = %id, "add_node");
        Ok(())
    }

    /// Add a directed edge from `origin` to `destination`.
    ///
    /// Both endpoints must already be registered and every weight must be
    /// non-negative. Nothing is mutated unless all checks pass.
    pub fn add_edge(
        &mut self,
        origin: impl Into<NodeId>,
        destination: impl Into<NodeId>,
        distance: i64,
        duration: i64,
        cost: i64,
    ) -> Result<EdgeId> {
        let origin = origin.into();
        let destination = destination.into();

        if !self.adjacency.contains_key(&origin) {
            bail_unknown_node!(origin);
        }
        if !self.adjacency.contains_key(&destination) {
            bail_unknown_node!(destination);
        }
        let weights = Weights::new(distance, duration, cost)?;

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            id,
            origin,
            destination,
            weights,
        });
        self.adjacency.entry(origin).or_default().push(id);

        debug!(
            edge = id.index(),
            %origin,
            %destination,
            distance = weights.distance,
            duration = weights.duration,
            cost = weights.cost,
            "add_edge"
        );
        Ok(id)
    }

    /// Registered node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All edges in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of `id` in creation order
    pub fn outgoing(&self, id: impl Into<NodeId>) -> Result<Vec<&Edge>> {
        let id = id.into();
        match self.adjacency.get(&id) {
            Some(handles) => Ok(handles.iter().filter_map(|&h| self.edge(h)).collect()),
            None => bail_unknown_node!(id),
        }
    }

    /// Direct edges from `origin` to `destination` in creation order
    pub fn edges_between(
        &self,
        origin: impl Into<NodeId>,
        destination: impl Into<NodeId>,
    ) -> Result<Vec<&Edge>> {
        let destination = destination.into();
        if !self.contains_node(destination) {
            bail_unknown_node!(destination);
        }
        Ok(self
            .outgoing(origin)?
            .into_iter()
            .filter(|e| e.destination == destination)
            .collect())
    }

    /// Look up an edge by its handle
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn contains_node(&self, id: impl Into<NodeId>) -> bool {
        self.adjacency.contains_key(&id.into())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
