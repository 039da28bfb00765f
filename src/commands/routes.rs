//! `routeplan routes` command - list all routes in definition order

use crate::cli::{Cli, OutputFormat};
use crate::output::{print_json, print_route_table, records_header, routes_json, RouteRow};
use routeplan_core::error::Result;
use routeplan_core::graph::{GraphStore, NodeId};

/// Execute the routes command
pub fn execute(cli: &Cli, store: &GraphStore, from: Option<NodeId>) -> Result<()> {
    let rows: Vec<RouteRow> = match from {
        Some(origin) => store.outgoing(origin)?.into_iter().map(RouteRow::from).collect(),
        None => store.edges().iter().map(RouteRow::from).collect(),
    };

    match cli.format {
        OutputFormat::Json => print_json(&routes_json(&rows))?,
        OutputFormat::Human => {
            if rows.is_empty() {
                if !cli.quiet {
                    println!("No routes found");
                }
            } else {
                if !cli.quiet {
                    println!("All possible routes:");
                }
                print_route_table(&rows, !cli.quiet);
            }
        }
        OutputFormat::Records => {
            println!("{}", records_header("routes", &format!("count={}", rows.len())));
            for row in &rows {
                println!("{}", row.to_record());
            }
        }
    }

    Ok(())
}
