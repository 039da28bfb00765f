//! Command implementations for all routeplan commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{airports, init, path, plan, routes};
use routeplan_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { force } => init::execute(ctx.cli, *force),
            Commands::Airports => airports::execute(ctx.cli, &ctx.load_network()?),
            Commands::Routes { from } => routes::execute(ctx.cli, &ctx.load_network()?, *from),
            Commands::Path { from, to, by } => {
                let criterion = by.unwrap_or(ctx.config.default_criterion);
                path::execute(ctx.cli, &ctx.load_network()?, *from, *to, criterion)
            }
            Commands::Plan { from, to } => plan::execute(
                ctx.cli,
                &ctx.load_network()?,
                *from,
                *to,
                &ctx.config.plan_criteria,
            ),
        }
    }
}
