//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source single-target weighted shortest path

pub mod dijkstra;

pub use dijkstra::{shortest_path, shortest_path_by};
