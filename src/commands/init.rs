//! `routeplan init` command - write the planner config file
//!
//! Idempotent: an existing config is left alone unless `--force` is given.
//! A `--network` given alongside is recorded as `default_network`.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::output::{print_json, records_header};
use routeplan_core::config::PlannerConfig;
use routeplan_core::error::Result;

/// Outcome of an init run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Created,
    Exists,
}

impl InitStatus {
    fn as_str(&self) -> &'static str {
        match self {
            InitStatus::Created => "created",
            InitStatus::Exists => "exists",
        }
    }
}

/// Write a default config to `path`, keeping an existing file unless `force`
pub fn init_config(path: &Path, network: Option<&Path>, force: bool) -> Result<InitStatus> {
    if path.exists() && !force {
        return Ok(InitStatus::Exists);
    }

    let default_network = network.map(std::path::absolute).transpose()?;
    let config = PlannerConfig {
        default_network,
        ..PlannerConfig::default()
    };
    config.save(path)?;
    tracing::debug!(path = %path.display(), "init_config");
    Ok(InitStatus::Created)
}

/// Execute the init command
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let path: PathBuf = PlannerConfig::config_path()?;
    let status = init_config(&path, cli.network.as_deref(), force)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "status": status.as_str(),
            "config": path.display().to_string(),
        }))?,
        OutputFormat::Human => match status {
            InitStatus::Created => println!("Wrote config to {}", path.display()),
            InitStatus::Exists => {
                if !cli.quiet {
                    println!(
                        "Config already exists at {} (use --force to overwrite)",
                        path.display()
                    );
                }
            }
        },
        OutputFormat::Records => println!(
            "{}",
            records_header(
                "init",
                &format!("config={} status={}", path.display(), status.as_str())
            )
        ),
    }

    Ok(())
}
