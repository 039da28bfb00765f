//! Route network graph and path-finding
//!
//! - `store`: node/edge storage with construction and enumeration
//! - `algos`: Dijkstra shortest path under a selected criterion
//! - `path`: predecessor-chain reconstruction and path totals
//! - `traversal`: read-only provider trait the algorithms consume

pub mod algos;
pub mod path;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{shortest_path, shortest_path_by};
pub use path::path_total;
pub use store::GraphStore;
pub use traversal::GraphProvider;
pub use types::{Criterion, Edge, EdgeId, NodeId, PathResult, Weights};
