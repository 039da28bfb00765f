use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Criterion, NodeId, PathResult};
use crate::graph::GraphProvider;
use crate::trace_time;

/// Frontier entry for the min-heap (ordered by accumulated weight, then by
/// discovery order so equal-weight entries pop first-in first-out).
///
/// Totals are `u128`: each edge weight fits in `i64`, so no path sum can
/// reach the `u128` limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub accumulated: u128,
    pub seq: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated
            .cmp(&other.accumulated)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a single Dijkstra run
struct DijkstraState {
    /// Tentative distance per known node; `None` is "infinite"
    tentative: HashMap<NodeId, Option<u128>>,
    predecessors: HashMap<NodeId, NodeId>,
    finalized: HashSet<NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl DijkstraState {
    fn new(provider: &dyn GraphProvider, source: NodeId) -> Self {
        let mut tentative: HashMap<NodeId, Option<u128>> = provider
            .node_ids()
            .into_iter()
            .map(|id| (id, None))
            .collect();
        tentative.insert(source, Some(0));

        let mut state = Self {
            tentative,
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(source, 0);
        state
    }

    fn push(&mut self, node_id: NodeId, accumulated: u128) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            accumulated,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Record `candidate` for `neighbor` if it strictly improves the
    /// tentative distance. Returns whether it did.
    fn relax(&mut self, from: NodeId, neighbor: NodeId, candidate: u128) -> bool {
        let improves = match self.tentative.get(&neighbor) {
            Some(Some(current)) => candidate < *current,
            _ => true,
        };
        if improves {
            self.tentative.insert(neighbor, Some(candidate));
            self.predecessors.insert(neighbor, from);
            self.push(neighbor, candidate);
        }
        improves
    }
}

/// Find the minimum-total-weight path from `source` to `destination` under
/// `criterion`.
///
/// Returns an empty path when `destination` is unreachable; that is a normal
/// result, not an error. `source == destination` yields `[source]`.
/// Among equal-weight paths, the one whose last hop was discovered first wins.
///
/// # Errors
/// `UnknownNode` if either endpoint is not in the graph (source checked first).
#[tracing::instrument(skip(provider), fields(source = %source, destination = %destination, criterion = %criterion))]
pub fn shortest_path(
    provider: &dyn GraphProvider,
    source: NodeId,
    destination: NodeId,
    criterion: Criterion,
) -> Result<PathResult> {
    if !provider.contains_node(source) {
        bail_unknown_node!(source);
    }
    if !provider.contains_node(destination) {
        bail_unknown_node!(destination);
    }

    let start = Instant::now();
    let mut state = DijkstraState::new(provider, source);

    while let Some(Reverse(HeapEntry {
        node_id: current,
        accumulated,
        ..
    })) = state.heap.pop()
    {
        // First extraction is authoritative; later entries are stale
        if !state.finalized.insert(current) {
            continue;
        }

        for edge in provider.outgoing_edges(current) {
            let candidate = accumulated + u128::from(edge.weight(criterion));
            if state.relax(current, edge.destination, candidate) {
                tracing::trace!(from = %current, to = %edge.destination, candidate, "relax");
            }
        }
    }

    let path = match state.tentative.get(&destination) {
        Some(Some(_)) => reconstruct_path(source, destination, &state.predecessors),
        _ => Vec::new(),
    };

    let explored = state.finalized.len();
    tracing::debug!(
        explored,
        hops = path.len().saturating_sub(1),
        found = !path.is_empty(),
        "shortest_path"
    );
    trace_time!(start, "shortest_path", explored = explored);

    Ok(path)
}

/// Same as [`shortest_path`] with the criterion given by name
/// (`distance`, `duration`/`time`, or `cost`).
///
/// # Errors
/// `InvalidCriterion` for any other name; no criterion is assumed by default.
pub fn shortest_path_by(
    provider: &dyn GraphProvider,
    source: NodeId,
    destination: NodeId,
    criterion: &str,
) -> Result<PathResult> {
    let criterion: Criterion = criterion.parse()?;
    shortest_path(provider, source, destination, criterion)
}
