// Dataset status: snapshot location and size, entity counts, most-liked post.

use std::path::Path;

use anyhow::Result;

use crate::store;

/// Display a summary of the snapshot at `data_path`.
pub fn show(data_path: &str) -> Result<()> {
    if !Path::new(data_path).exists() {
        println!("Network: not initialized");
        println!("\nRun `reachgraph init` to create the demo dataset.");
        return Ok(());
    }

    let file_size = std::fs::metadata(data_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Network: {} ({})", data_path, file_size);

    let network = store::open(data_path)?;
    let graph = network.friend_graph();
    println!(
        "Users: {} ({} friendships)",
        network.user_count(),
        graph.edge_count()
    );
    println!("Posts: {}", network.posts().len());
    println!("Ads: {}", network.ads().len());
    println!("Likes recorded: {}", network.likes().len());

    let isolated = graph.nodes().filter(|id| graph.degree(id) == 0).count();
    if isolated > 0 {
        println!("  {isolated} users have no friends yet");
    }

    match network.posts().iter().max_by_key(|p| p.likes()) {
        Some(post) => println!("Most liked: {} ({} likes)", post.id, post.likes()),
        None => {
            println!("Most liked: no posts yet");
            println!("  Run `reachgraph publish` to add one");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_show_without_snapshot_is_ok() {
        assert!(show("/definitely/not/here/network.json").is_ok());
    }
}
