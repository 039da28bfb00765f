//! Shared output helpers for human, JSON, and records formats

use serde::Serialize;
use serde_json::json;

use routeplan_core::error::Result;
use routeplan_core::graph::{Criterion, Edge, NodeId};

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: u64,
    pub time: u64,
    pub cost: u64,
}

impl From<&Edge> for RouteRow {
    fn from(edge: &Edge) -> Self {
        RouteRow {
            from: edge.origin,
            to: edge.destination,
            distance: edge.weights.distance,
            time: edge.weights.duration,
            cost: edge.weights.cost,
        }
    }
}

impl RouteRow {
    /// All-zero row for a trip that starts where it ends
    pub fn stay(at: NodeId) -> Self {
        RouteRow {
            from: at,
            to: at,
            distance: 0,
            time: 0,
            cost: 0,
        }
    }

    pub fn to_record(&self) -> String {
        format!(
            "E {} {} distance={} time={} cost={}",
            self.from, self.to, self.distance, self.time, self.cost
        )
    }
}

/// Best route found under one criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestRoute {
    pub criterion: Criterion,
    pub found: bool,
    pub path: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u128>,
}

impl BestRoute {
    pub fn to_human(&self) -> String {
        if self.found {
            let total = self
                .total
                .map(|t| format!(" (total {})", t))
                .unwrap_or_default();
            format!(
                "Best route based on {}: {}{}",
                self.criterion.label(),
                format_path(&self.path),
                total
            )
        } else {
            format!("No valid route found based on {}.", self.criterion.label())
        }
    }

    pub fn to_record(&self) -> String {
        let mut line = format!(
            "P by={} found={} path={}",
            self.criterion,
            self.found,
            join_ids(&self.path, ",")
        );
        if let Some(total) = self.total {
            line.push_str(&format!(" total={}", total));
        }
        line
    }
}

pub fn format_path(path: &[NodeId]) -> String {
    join_ids(path, " -> ")
}

fn join_ids(path: &[NodeId], sep: &str) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Print an aligned route table
pub fn print_route_table(rows: &[RouteRow], with_header: bool) {
    if with_header {
        println!(
            "{:<6} {:<12} {:>9} {:>12} {:>9}",
            "Start", "Destination", "Distance", "Travel Time", "Cost"
        );
    }
    for row in rows {
        println!(
            "{:<6} {:<12} {:>9} {:>12} {:>9}",
            row.from, row.to, row.distance, row.time, row.cost
        );
    }
}

/// Header line for records output
pub fn records_header(mode: &str, extra: &str) -> String {
    if extra.is_empty() {
        format!("H routeplan=1 records=1 mode={}", mode)
    } else {
        format!("H routeplan=1 records=1 mode={} {}", mode, extra)
    }
}

pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn routes_json(rows: &[RouteRow]) -> serde_json::Value {
    json!({ "count": rows.len(), "routes": rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&ids(&[0, 1, 3])), "0 -> 1 -> 3");
        assert_eq!(format_path(&ids(&[4])), "4");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn test_best_route_human() {
        let found = BestRoute {
            criterion: Criterion::Duration,
            found: true,
            path: ids(&[0, 2]),
            total: Some(20),
        };
        assert_eq!(
            found.to_human(),
            "Best route based on travel time: 0 -> 2 (total 20)"
        );

        let missing = BestRoute {
            criterion: Criterion::Cost,
            found: false,
            path: Vec::new(),
            total: None,
        };
        assert_eq!(missing.to_human(), "No valid route found based on cost.");
    }

    #[test]
    fn test_best_route_record() {
        let found = BestRoute {
            criterion: Criterion::Distance,
            found: true,
            path: ids(&[0, 1, 3]),
            total: Some(200),
        };
        assert_eq!(
            found.to_record(),
            "P by=distance found=true path=0,1,3 total=200"
        );
    }

    #[test]
    fn test_route_row_record() {
        let row = RouteRow::stay(NodeId::new(2));
        assert_eq!(row.to_record(), "E 2 2 distance=0 time=0 cost=0");
    }

    #[test]
    fn test_records_header() {
        assert_eq!(
            records_header("routes", ""),
            "H routeplan=1 records=1 mode=routes"
        );
        assert_eq!(
            records_header("path", "from=0 to=3"),
            "H routeplan=1 records=1 mode=path from=0 to=3"
        );
    }
}
