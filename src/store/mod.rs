// Snapshot store: the network as a pretty-printed JSON file.
//
// The whole `Network` is serialized with serde; there is no schema beyond
// the model types themselves. Mutating commands load, change and save.

pub mod seed;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::model::Network;

/// Write the demo dataset to `path` unless a snapshot is already there.
///
/// With `force`, an existing snapshot is replaced. Returns the network now
/// stored at `path` and whether it was freshly seeded.
pub fn initialize(path: &str, force: bool) -> Result<(Network, bool)> {
    if Path::new(path).exists() && !force {
        info!(path, "Existing snapshot found, not seeding");
        return Ok((open(path)?, false));
    }

    let network = seed::demo_network(Utc::now());
    save(path, &network)?;
    info!(
        path,
        users = network.user_count(),
        posts = network.posts().len(),
        ads = network.ads().len(),
        "Seeded demo network"
    );
    Ok((network, true))
}

/// Load an existing snapshot (fails if it doesn't exist yet).
pub fn open(path: &str) -> Result<Network> {
    if !Path::new(path).exists() {
        anyhow::bail!("Network snapshot not found at {}. Run `reachgraph init` first.", path);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read network snapshot at {}", path))?;
    let network: Network = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse network snapshot at {}", path))?;
    Ok(network)
}

/// Write `network` to `path`, creating parent directories if needed.
pub fn save(path: &str, network: &Network) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for snapshot: {}", path))?;
        }
    }

    let json = serde_json::to_string_pretty(network)?;
    fs::write(path, json).with_context(|| format!("Failed to write network snapshot to {}", path))?;
    Ok(())
}
