//! Planner configuration (stored in ~/.config/routeplan/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::Criterion;

const CONFIG_DIR: &str = "routeplan";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEPLAN_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Criterion used by `path` when none is given
    pub default_criterion: Criterion,
    /// Criteria reported by `plan`, in display order
    pub plan_criteria: Vec<Criterion>,
    /// Network file used when `--network` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_network: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            default_criterion: Criterion::Distance,
            plan_criteria: vec![Criterion::Cost, Criterion::Distance, Criterion::Duration],
            default_network: None,
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RouteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global configuration, falling back to defaults when the file
    /// does not exist
    pub fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: PlannerConfig = toml::from_str(&content).map_err(|e| {
            RouteError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        if config.plan_criteria.is_empty() {
            tracing::warn!(path = %path.display(), "plan_criteria is empty; plan will report no routes");
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
