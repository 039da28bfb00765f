//! `routeplan plan` command - direct routes plus the best route per criterion
//!
//! A trip whose start and destination are the same airport is not planned:
//! it is reported as a single all-zero row and no queries are run.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::path::best_route;
use crate::output::{print_json, print_route_table, records_header, BestRoute, RouteRow};
use routeplan_core::bail_unknown_node;
use routeplan_core::error::Result;
use routeplan_core::graph::{Criterion, GraphStore, NodeId};

const SAME_AIRPORT_MESSAGE: &str =
    "Start and destination cannot be the same. All criteria set to zero.";

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub from: NodeId,
    pub to: NodeId,
    pub same_airport: bool,
    pub direct_routes: Vec<RouteRow>,
    pub best: Vec<BestRoute>,
}

/// Build the plan for a trip from `from` to `to`
pub fn build_plan(
    store: &GraphStore,
    from: NodeId,
    to: NodeId,
    criteria: &[Criterion],
) -> Result<Plan> {
    for id in [from, to] {
        if !store.contains_node(id) {
            bail_unknown_node!(id);
        }
    }

    if from == to {
        return Ok(Plan {
            from,
            to,
            same_airport: true,
            direct_routes: vec![RouteRow::stay(from)],
            best: Vec::new(),
        });
    }

    let direct_routes = store
        .edges_between(from, to)?
        .into_iter()
        .map(RouteRow::from)
        .collect();

    let best = criteria
        .iter()
        .map(|&criterion| best_route(store, from, to, criterion))
        .collect::<Result<Vec<_>>>()?;

    Ok(Plan {
        from,
        to,
        same_airport: false,
        direct_routes,
        best,
    })
}

/// Execute the plan command
pub fn execute(
    cli: &Cli,
    store: &GraphStore,
    from: NodeId,
    to: NodeId,
    criteria: &[Criterion],
) -> Result<()> {
    let plan = build_plan(store, from, to, criteria)?;
    tracing::debug!(
        %from,
        %to,
        direct = plan.direct_routes.len(),
        criteria = plan.best.len(),
        "plan"
    );

    match cli.format {
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Human => output_human(cli, &plan),
        OutputFormat::Records => output_records(&plan),
    }

    Ok(())
}

fn output_human(cli: &Cli, plan: &Plan) {
    if plan.direct_routes.is_empty() {
        if !cli.quiet {
            println!("No direct routes from {} to {}", plan.from, plan.to);
        }
    } else {
        print_route_table(&plan.direct_routes, !cli.quiet);
    }

    if plan.same_airport {
        println!("{}", SAME_AIRPORT_MESSAGE);
        return;
    }

    if !cli.quiet {
        println!();
    }
    for route in &plan.best {
        println!("{}", route.to_human());
    }
}

fn output_records(plan: &Plan) {
    println!(
        "{}",
        records_header(
            "plan",
            &format!(
                "from={} to={} same_airport={}",
                plan.from, plan.to, plan.same_airport
            )
        )
    );
    for row in &plan.direct_routes {
        println!("{}", row.to_record());
    }
    for route in &plan.best {
        println!("{}", route.to_record());
    }
}
