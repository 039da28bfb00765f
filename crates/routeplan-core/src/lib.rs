//! Routeplan Core Library
//!
//! Graph store and multi-criterion shortest-path engine for route planning
//! over a network of airports.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
