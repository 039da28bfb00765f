//! `routeplan path` command - best route under a single criterion

use crate::cli::{Cli, OutputFormat};
use crate::output::{print_json, records_header, BestRoute};
use routeplan_core::error::Result;
use routeplan_core::graph::{path_total, shortest_path, Criterion, GraphStore, NodeId};

/// Run one query and recompute the total of the returned path
pub fn best_route(
    store: &GraphStore,
    from: NodeId,
    to: NodeId,
    criterion: Criterion,
) -> Result<BestRoute> {
    let path = shortest_path(store, from, to, criterion)?;
    let total = path_total(store, &path, criterion);
    Ok(BestRoute {
        criterion,
        found: !path.is_empty(),
        path,
        total,
    })
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    store: &GraphStore,
    from: NodeId,
    to: NodeId,
    criterion: Criterion,
) -> Result<()> {
    let route = best_route(store, from, to, criterion)?;

    match cli.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "from": from,
                "to": to,
                "route": route,
            }))?;
        }
        OutputFormat::Human => println!("{}", route.to_human()),
        OutputFormat::Records => {
            println!(
                "{}",
                records_header("path", &format!("from={} to={}", from, to))
            );
            println!("{}", route.to_record());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_route_recomputes_total() {
        let mut store = GraphStore::new();
        for id in 0..3 {
            store.add_node(id).unwrap();
        }
        store.add_edge(0, 1, 10, 20, 30).unwrap();
        store.add_edge(1, 2, 1, 2, 3).unwrap();

        let route = best_route(&store, NodeId::new(0), NodeId::new(2), Criterion::Cost).unwrap();
        assert!(route.found);
        assert_eq!(route.total, Some(33));

        let back = best_route(&store, NodeId::new(2), NodeId::new(0), Criterion::Cost).unwrap();
        assert!(!back.found);
        assert!(back.path.is_empty());
        assert_eq!(back.total, None);
    }
}
