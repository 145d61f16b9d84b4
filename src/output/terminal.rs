// Colored terminal output for network listings and analysis results.
//
// main.rs runs the analyses and hands the results here. Nothing in this
// module computes anything beyond column formatting.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::model::{Ad, Interaction, Network, Post};
use crate::pathfinding::InfluencePath;
use crate::recommend::Recommendation;
use crate::selection::{AdAllocation, CoverPlan};

/// List every user with their friend count.
pub fn display_users(network: &Network) {
    if network.user_count() == 0 {
        println!("No users yet. Run `reachgraph add-user` or `reachgraph init`.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Users ({}) ===", network.user_count()).bold()
    );
    println!();
    println!(
        "  {:<6} {:<24} {:>7}  {}",
        "ID".dimmed(),
        "Name".dimmed(),
        "Friends".dimmed(),
        "Friend IDs".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());

    for user in network.users() {
        println!(
            "  {:<6} {:<24} {:>7}  {}",
            user.id,
            user.name,
            user.friends.len(),
            user.friends.join(", ").dimmed(),
        );
    }
    println!();
}

/// List posts in the order given, with their cover metrics.
pub fn display_posts(title: &str, posts: &[&Post], names: &HashMap<String, String>, now: DateTime<Utc>) {
    if posts.is_empty() {
        println!("No posts yet. Run `reachgraph publish` to add one.");
        return;
    }

    println!("\n{}", format!("=== {title} ({}) ===", posts.len()).bold());
    println!();
    println!(
        "  {:<6} {:<18} {:>5} {:>5} {:>7} {:>9} {:>5}  {}",
        "ID".dimmed(),
        "Author".dimmed(),
        "Likes".dimmed(),
        "Size".dimmed(),
        "Benefit".dimmed(),
        "Relevance".dimmed(),
        "Age".dimmed(),
        "Content".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for post in posts {
        let age = super::format_age((now - post.created_at).num_hours());
        println!(
            "  {:<6} {:<18} {:>5} {:>5} {:>7} {:>9.1} {:>5}  \"{}\"",
            post.id,
            author_name(names, &post.author_id),
            post.likes(),
            post.size(),
            post.benefit(),
            post.relevance_at(now),
            age,
            super::truncate_chars(&post.content, 40).dimmed(),
        );
    }
    println!();
}

/// Top-k ranking with rank numbers.
pub fn display_top(posts: &[&Post], k: usize, names: &HashMap<String, String>, now: DateTime<Utc>) {
    if posts.is_empty() {
        println!("No posts to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} posts by relevance ===", k.min(posts.len())).bold()
    );
    println!();
    for (i, post) in posts.iter().enumerate() {
        let rank = format!("{:>2}.", i + 1);
        println!(
            "  {} {:<6} {:>9.1}  by {:<18} \"{}\"",
            if i == 0 { rank.green().bold() } else { rank.normal() },
            post.id,
            post.relevance_at(now),
            author_name(names, &post.author_id),
            super::truncate_chars(&post.content, 48),
        );
    }
    println!();
}

/// The ad catalogue.
pub fn display_ads(ads: &[Ad]) {
    if ads.is_empty() {
        println!("No ads in the catalogue. Run `reachgraph add-ad` to add one.");
        return;
    }

    println!("\n{}", format!("=== Ads ({}) ===", ads.len()).bold());
    println!();
    print_ad_header();
    for ad in ads {
        print_ad_row(ad);
    }
    println!();
}

/// Result of the ad budget allocation.
pub fn display_allocation(allocation: &AdAllocation) {
    println!(
        "\n{}",
        format!("=== Ad allocation (budget {}) ===", allocation.budget).bold()
    );
    println!();

    if allocation.ads.is_empty() {
        println!("  No ad fits within the budget.");
        println!();
        return;
    }

    print_ad_header();
    for ad in &allocation.ads {
        print_ad_row(ad);
    }
    println!("  {}", "-".repeat(44).dimmed());
    println!(
        "  Max reach: {}   Cost: {}   Remaining: {}",
        allocation.max_reach.to_string().green().bold(),
        allocation.total_cost(),
        allocation.remaining(),
    );
    println!();
}

/// Result of the cover-space optimization.
pub fn display_cover(plan: &CoverPlan, names: &HashMap<String, String>) {
    println!(
        "\n{}",
        format!("=== Cover plan (space {}) ===", plan.max_space).bold()
    );
    println!();

    if plan.posts.is_empty() {
        println!("  No post fits on the cover.");
        println!();
        return;
    }

    for post in &plan.posts {
        println!(
            "  {:<6} size {:>2}  benefit {:>5}  by {:<18} \"{}\"",
            post.id,
            post.size(),
            post.benefit(),
            author_name(names, &post.author_id),
            super::truncate_chars(&post.content, 40).dimmed(),
        );
    }
    println!("  {}", "-".repeat(60).dimmed());
    println!(
        "  Total benefit: {}   Space used: {}   Free: {}",
        plan.max_benefit.to_string().green().bold(),
        plan.space_used(),
        plan.remaining(),
    );
    println!();
}

/// Friend recommendations for one user.
pub fn display_recommendations(
    user_id: &str,
    recommendations: &[Recommendation],
    names: &HashMap<String, String>,
) {
    println!(
        "\n{}",
        format!("=== Recommendations for {} ===", author_name(names, user_id)).bold()
    );
    println!();

    if recommendations.is_empty() {
        println!("  No recommendations. Add friends or likes to widen the network.");
        println!();
        return;
    }

    println!(
        "  {:<6} {:<24} {:>8} {:>8}",
        "ID".dimmed(),
        "Name".dimmed(),
        "Distance".dimmed(),
        "Affinity".dimmed(),
    );
    for rec in recommendations {
        println!(
            "  {:<6} {:<24} {:>8.2} {:>8.1}",
            rec.user_id,
            author_name(names, &rec.user_id),
            rec.distance,
            rec.affinity,
        );
    }
    println!();
}

/// Hop distances from one user, grouped by level.
pub fn display_distances(
    user_id: &str,
    distances: &BTreeMap<String, usize>,
    friends_of_friends: &[String],
    names: &HashMap<String, String>,
) {
    println!(
        "\n{}",
        format!("=== Hop distances from {} ===", author_name(names, user_id)).bold()
    );
    println!();

    let mut levels: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (id, hops) in distances {
        if *hops > 0 {
            levels.entry(*hops).or_default().push(id);
        }
    }

    if levels.is_empty() {
        println!("  Nobody is reachable from {user_id}.");
    }
    for (hops, ids) in &levels {
        let label = if *hops == 1 { "hop " } else { "hops" };
        println!("  {hops:>2} {label}  {}", ids.join(", "));
    }

    println!();
    if friends_of_friends.is_empty() {
        println!("  Friends of friends: {}", "none".dimmed());
    } else {
        println!(
            "  Friends of friends: {}",
            friends_of_friends.join(", ").cyan()
        );
    }
    println!();
}

/// Likes a user gave, and who liked their posts.
pub fn display_interactions(
    user_id: &str,
    given: &[&Interaction],
    received: &BTreeMap<String, usize>,
    names: &HashMap<String, String>,
) {
    println!(
        "\n{}",
        format!("=== Interactions of {} ===", author_name(names, user_id)).bold()
    );
    println!();

    println!("  {} ({})", "Likes given".bold(), given.len());
    if given.is_empty() {
        println!("    {}", "none".dimmed());
    }
    for like in given {
        println!(
            "    {:<6} by {:<18} {}",
            like.post_id,
            author_name(names, &like.author_id),
            like.liked_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
        );
    }

    println!();
    let total: usize = received.values().sum();
    println!("  {} ({})", "Likes received".bold(), total);
    if received.is_empty() {
        println!("    {}", "none".dimmed());
    }
    for (liker, count) in received {
        println!("    {:<24} {:>3}", author_name(names, liker), count);
    }
    println!();
}

/// Influence path and, for contrast, the plain shortest path.
pub fn display_paths(
    origin: &str,
    destination: &str,
    influence: Option<&InfluencePath>,
    shortest: Option<&[String]>,
    names: &HashMap<String, String>,
) {
    println!(
        "\n{}",
        format!(
            "=== Influence path {} -> {} ===",
            author_name(names, origin),
            author_name(names, destination)
        )
        .bold()
    );
    println!();

    match influence {
        Some(path) => {
            println!("  Path:          {}", path.nodes.join(" -> ").green().bold());
            println!("  Effectiveness: {:.1}", path.effectiveness);
            println!("  Hops:          {}", path.hops());
            if path.truncated {
                println!(
                    "  {}",
                    "Search budget exhausted; best path found so far.".yellow()
                );
            }
        }
        None => println!("  {}", "No path between these users.".red()),
    }

    if let Some(nodes) = shortest {
        println!("  Shortest:      {}", nodes.join(" -> ").dimmed());
    }
    println!();
}

fn print_ad_header() {
    println!(
        "  {:<24} {:>6} {:>8}",
        "Name".dimmed(),
        "Cost".dimmed(),
        "Reach".dimmed(),
    );
}

fn print_ad_row(ad: &Ad) {
    println!("  {:<24} {:>6} {:>8}", ad.name, ad.cost, ad.reach);
}

/// Display name for an id, falling back to the id itself.
fn author_name<'a>(names: &'a HashMap<String, String>, id: &'a str) -> &'a str {
    names.get(id).map(String::as_str).unwrap_or(id)
}
