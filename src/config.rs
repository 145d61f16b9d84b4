use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pathfinding::influence::DEFAULT_MAX_EXPANSIONS;

/// Default location of the network snapshot.
pub const DEFAULT_DATA_PATH: &str = "./data/network.json";

/// Default number of posts shown by `top`.
pub const DEFAULT_TOP_K: usize = 5;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so any of
/// these can live there instead of the shell environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Snapshot file the network is loaded from and saved to
    /// (REACHGRAPH_DATA_PATH)
    pub data_path: String,
    /// Node expansions allowed for one influence search
    /// (REACHGRAPH_PATH_BUDGET)
    pub path_budget: usize,
    /// Default `k` for the relevance ranking (REACHGRAPH_TOP_K)
    pub top_k: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; only malformed numbers are an error.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_path: env::var("REACHGRAPH_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
            path_budget: parse_var("REACHGRAPH_PATH_BUDGET", DEFAULT_MAX_EXPANSIONS)?,
            top_k: parse_var("REACHGRAPH_TOP_K", DEFAULT_TOP_K)?,
        })
    }

    /// Check that the snapshot file exists.
    /// Call this before any command that reads the network.
    pub fn require_data(&self) -> Result<()> {
        if !Path::new(&self.data_path).exists() {
            anyhow::bail!(
                "No network data at {}.\n\
                 Run `reachgraph init` to create the demo dataset,\n\
                 or set REACHGRAPH_DATA_PATH to an existing snapshot.",
                self.data_path
            );
        }
        Ok(())
    }
}

/// Read a numeric variable, falling back to `default` when unset.
fn parse_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
