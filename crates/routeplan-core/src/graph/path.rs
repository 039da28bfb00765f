//! Path reconstruction utilities for graph traversal

use std::collections::HashMap;

use crate::graph::store::GraphStore;
use crate::graph::types::{Criterion, NodeId, PathResult};

/// Walk predecessor links from `destination` back to `source` and return the
/// path in source-to-destination order.
///
/// Returns an empty path if the chain breaks before reaching `source`.
pub fn reconstruct_path(
    source: NodeId,
    destination: NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> PathResult {
    let mut path = vec![destination];
    let mut current = destination;

    while current != source {
        match predecessors.get(&current) {
            Some(&pred) => {
                current = pred;
                path.push(current);
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Recompute the total weight of `path` under `criterion`.
///
/// Each hop uses the cheapest direct edge between its endpoints. Returns
/// `None` for an empty path or when some hop has no edge. The total is
/// `u128` so sums past `u64::MAX` stay exact.
pub fn path_total(store: &GraphStore, path: &[NodeId], criterion: Criterion) -> Option<u128> {
    if path.is_empty() {
        return None;
    }

    path.windows(2).try_fold(0u128, |total, hop| {
        let cheapest = store
            .edges_between(hop[0], hop[1])
            .ok()?
            .into_iter()
            .map(|e| e.weight(criterion))
            .min()?;
        Some(total + u128::from(cheapest))
    })
}
