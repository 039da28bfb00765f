//! CLI argument parsing for routeplan
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use routeplan_core::graph::{Criterion, NodeId};

/// Routeplan - best routes between airports by distance, travel time, or cost
#[derive(Parser, Debug)]
#[command(name = "routeplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network description file (TOML)
    #[arg(long, short = 'n', global = true, env = "ROUTEPLAN_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `routeplan_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the config file (records --network as the default network)
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List airports in the network
    Airports,

    /// List all routes in the order they were defined
    Routes {
        /// Only routes departing from this airport
        #[arg(long, value_parser = parse_node_id)]
        from: Option<NodeId>,
    },

    /// Find the best route between two airports under one criterion
    Path {
        /// Start airport
        #[arg(value_parser = parse_node_id)]
        from: NodeId,

        /// Destination airport
        #[arg(value_parser = parse_node_id)]
        to: NodeId,

        /// Criterion to optimise: distance, time (duration), or cost
        #[arg(long, short, value_parser = parse_criterion)]
        by: Option<Criterion>,
    },

    /// Show direct routes and the best route under every criterion
    Plan {
        /// Start airport
        #[arg(value_parser = parse_node_id)]
        from: NodeId,

        /// Destination airport
        #[arg(value_parser = parse_node_id)]
        to: NodeId,
    },
}

/// Output format for routeplan commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

fn parse_node_id(s: &str) -> Result<NodeId, String> {
    s.parse().map_err(|e: routeplan_core::error::RouteError| e.to_string())
}

fn parse_criterion(s: &str) -> Result<Criterion, String> {
    s.parse().map_err(|e: routeplan_core::error::RouteError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "routeplan", "--network", "net.toml", "path", "0", "3", "--by", "time",
        ])
        .unwrap();

        assert_eq!(cli.network, Some(PathBuf::from("net.toml")));
        match cli.command {
            Some(Commands::Path { from, to, by }) => {
                assert_eq!(from, NodeId::new(0));
                assert_eq!(to, NodeId::new(3));
                assert_eq!(by, Some(Criterion::Duration));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_criterion() {
        let err = Cli::try_parse_from(["routeplan", "path", "0", "1", "--by", "speed"]).unwrap_err();
        assert!(err.to_string().contains("unknown criterion"));
    }

    #[test]
    fn test_parse_rejects_negative_node() {
        assert!(Cli::try_parse_from(["routeplan", "plan", "-1", "2"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected_by_clap() {
        let err = Cli::try_parse_from(["routeplan", "--format", "xml", "airports"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_parse_init_command() {
        let cli = Cli::try_parse_from(["routeplan", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["routeplan", "--format", "records", "airports"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Records);
        assert!(matches!(cli.command, Some(Commands::Airports)));
    }
}
