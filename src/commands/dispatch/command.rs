//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use crate::network;
use routeplan_core::bail_usage;
use routeplan_core::config::PlannerConfig;
use routeplan_core::error::Result;
use routeplan_core::graph::GraphStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PlannerConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = PlannerConfig::load_global()?;
        Ok(Self { cli, config, start })
    }

    /// Network file from `--network`, falling back to the configured default
    pub fn network_path(&self) -> Result<PathBuf> {
        match (&self.cli.network, &self.config.default_network) {
            (Some(path), _) | (None, Some(path)) => Ok(path.clone()),
            (None, None) => bail_usage!(
                "no network file given (use --network or set default_network in the config)"
            ),
        }
    }

    /// Build the graph store from the resolved network file
    pub fn load_network(&self) -> Result<GraphStore> {
        let path = self.network_path()?;
        let store = network::load(&path)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_network");
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routeplan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Best routes between airports by distance, travel time, or cost.");
        println!();
        println!("Run `routeplan --help` for usage information.");
        Ok(())
    }
}
