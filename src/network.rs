//! Network description files
//!
//! A network file lists airport ids and the directed routes between them:
//!
//! ```toml
//! airports = [0, 1, 2]
//!
//! [[routes]]
//! from = 0
//! to = 1
//! distance = 100
//! time = 30
//! cost = 50
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use routeplan_core::error::{Result, RouteError};
use routeplan_core::graph::GraphStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkFile {
    pub airports: Vec<u32>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub from: u32,
    pub to: u32,
    pub distance: i64,
    #[serde(alias = "duration")]
    pub time: i64,
    pub cost: i64,
}

impl NetworkFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Populate a fresh store: airports first, then routes in file order
    pub fn build(&self) -> Result<GraphStore> {
        let mut store = GraphStore::new();
        for &id in &self.airports {
            store.add_node(id)?;
        }
        for route in &self.routes {
            store.add_edge(route.from, route.to, route.distance, route.time, route.cost)?;
        }
        Ok(store)
    }
}

/// Read and build the network at `path`
pub fn load(path: &Path) -> Result<GraphStore> {
    let content = fs::read_to_string(path)
        .map_err(|e| RouteError::invalid_network(path, format!("cannot read file: {}", e)))?;

    let network = NetworkFile::parse(&content)
        .map_err(|e| RouteError::invalid_network(path, e))?;

    let store = network.build()?;
    debug!(
        path = %path.display(),
        airports = store.node_count(),
        routes = store.edge_count(),
        "load_network"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplan_core::graph::NodeId;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
airports = [0, 1, 2]

[[routes]]
from = 0
to = 1
distance = 100
time = 30
cost = 50

[[routes]]
from = 1
to = 2
distance = 80
duration = 45
cost = 70
"#;

    #[test]
    fn test_build_sample() {
        let store = NetworkFile::parse(SAMPLE).unwrap().build().unwrap();
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 2);

        let second = &store.edges()[1];
        assert_eq!(second.origin, NodeId::new(1));
        assert_eq!(second.weights.duration, 45);
    }

    #[test]
    fn test_route_to_unknown_airport() {
        let network = NetworkFile::parse(
            "airports = [0]\n[[routes]]\nfrom = 0\nto = 5\ndistance = 1\ntime = 1\ncost = 1\n",
        )
        .unwrap();
        assert!(matches!(
            network.build(),
            Err(RouteError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_duplicate_airport() {
        let network = NetworkFile::parse("airports = [0, 0]\n").unwrap();
        assert!(matches!(
            network.build(),
            Err(RouteError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "airports = \"nope\"").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, RouteError::InvalidNetwork { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RouteError::InvalidNetwork { .. }));
    }
}
