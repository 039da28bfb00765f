//! `routeplan airports` command - list airport ids

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::output::{print_json, records_header};
use routeplan_core::error::Result;
use routeplan_core::graph::{GraphStore, NodeId};

/// Execute the airports command
pub fn execute(cli: &Cli, store: &GraphStore) -> Result<()> {
    let airports: Vec<NodeId> = store.nodes().collect();

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({ "count": airports.len(), "airports": airports }))?;
        }
        OutputFormat::Human => {
            if airports.is_empty() && !cli.quiet {
                println!("No airports in network");
            }
            for id in &airports {
                let departures = store.outgoing(*id)?.len();
                println!("Airport {} ({} departing routes)", id, departures);
            }
        }
        OutputFormat::Records => {
            println!("{}", records_header("airports", &format!("count={}", airports.len())));
            for id in &airports {
                println!("N {}", id);
            }
        }
    }

    Ok(())
}
