use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use reachgraph::config::Config;
use reachgraph::model::{Ad, FriendshipOutcome, LikeOutcome, Network, Post};
use reachgraph::output::terminal;
use reachgraph::pathfinding::{self, PathSearch};
use reachgraph::{ranking, recommend, selection, status, store};

/// Reachgraph: reach, cover and friend analysis for a small social network.
///
/// Allocates an ad budget, picks the best posts for a cover, recommends new
/// friends from like history and finds influence paths between users.
#[derive(Parser)]
#[command(name = "reachgraph", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file with the demo network
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Show dataset status (counts, file size, most-liked post)
    Status,

    /// List users and their friends
    Users,

    /// List posts in storage order
    Posts,

    /// List the ad catalogue
    Ads,

    /// Register a new user
    AddUser {
        /// Unique user id (e.g. U009)
        id: String,
        /// Display name
        name: String,
    },

    /// Make two users friends
    Befriend { a: String, b: String },

    /// Publish a post
    Publish {
        /// Unique post id (e.g. P009)
        id: String,
        /// Author's user id
        author: String,
        /// Post text
        content: String,
    },

    /// Add an ad to the catalogue
    AddAd {
        name: String,
        cost: u32,
        reach: u32,
    },

    /// Record that a user liked a post
    Like { user: String, post: String },

    /// Choose the ads that maximize reach within a budget
    #[command(allow_negative_numbers = true)]
    Allocate { budget: i64 },

    /// Choose the posts that maximize benefit within the cover space
    #[command(allow_negative_numbers = true)]
    Cover { space: i64 },

    /// Likes a user gave and likes their posts received
    Interactions { user: String },

    /// Recommend new friends for a user
    Recommend { user: String },

    /// Hop distances and friends of friends for a user
    Distances { user: String },

    /// Most effective influence path between two users
    Path { origin: String, destination: String },

    /// Top posts by relevance (default from REACHGRAPH_TOP_K)
    Top { k: Option<usize> },

    /// All posts, newest first
    Timeline,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reachgraph=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init { force } => {
            let (network, seeded) = store::initialize(&config.data_path, force)?;
            if seeded {
                println!("Demo network written to: {}", config.data_path);
            } else {
                println!("Data file already exists: {}", config.data_path);
                println!("  Use `reachgraph init --force` to replace it");
            }
            println!(
                "Users: {}  Posts: {}  Ads: {}",
                network.user_count(),
                network.posts().len(),
                network.ads().len()
            );
        }

        Commands::Status => {
            status::show(&config.data_path)?;
        }

        Commands::Users => {
            let network = load(&config)?;
            terminal::display_users(&network);
        }

        Commands::Posts => {
            let network = load(&config)?;
            let posts: Vec<&Post> = network.posts().iter().collect();
            terminal::display_posts("Posts", &posts, &network.display_names(), Utc::now());
        }

        Commands::Ads => {
            let network = load(&config)?;
            terminal::display_ads(network.ads());
        }

        Commands::AddUser { id, name } => {
            let mut network = load(&config)?;
            if network.add_user(&id, &name) {
                store::save(&config.data_path, &network)?;
                info!(user = %id, "Added user");
                println!("Added user {} ({})", id, name);
            } else {
                warn!(user = %id, "User id already taken");
                println!("{}", format!("User {id} already exists, nothing changed.").yellow());
            }
        }

        Commands::Befriend { a, b } => {
            let mut network = load(&config)?;
            match network.add_friendship(&a, &b) {
                FriendshipOutcome::Created => {
                    store::save(&config.data_path, &network)?;
                    println!("{} and {} are now friends", a, b);
                }
                FriendshipOutcome::AlreadyFriends => {
                    println!("{} and {} were already friends", a, b);
                }
                FriendshipOutcome::UnknownUser(id) => {
                    println!("{}", format!("Unknown user: {id}").red());
                }
                FriendshipOutcome::SelfFriendship => {
                    println!("{}", "A user cannot befriend themself.".red());
                }
            }
        }

        Commands::Publish {
            id,
            author,
            content,
        } => {
            let mut network = load(&config)?;
            if network.user(&author).is_none() {
                println!("{}", format!("Unknown author: {author}").red());
                return Ok(());
            }
            let post = Post::new(&id, &author, content, Utc::now(), 0);
            let size = post.size();
            if network.add_post(post) {
                store::save(&config.data_path, &network)?;
                info!(post = %id, author = %author, size, "Published post");
                println!("Published {} (size {})", id, size);
            } else {
                println!("{}", format!("Post {id} already exists, nothing changed.").yellow());
            }
        }

        Commands::AddAd { name, cost, reach } => {
            let mut network = load(&config)?;
            network.add_ad(Ad::new(&name, cost, reach));
            store::save(&config.data_path, &network)?;
            println!("Added ad \"{}\" (cost {}, reach {})", name, cost, reach);
        }

        Commands::Like { user, post } => {
            let mut network = load(&config)?;
            match network.like_post(&user, &post, Utc::now()) {
                LikeOutcome::Recorded { likes } => {
                    store::save(&config.data_path, &network)?;
                    println!("{} liked {} ({} likes)", user, post, likes);
                }
                LikeOutcome::Duplicate => {
                    println!("{}", format!("{user} already liked {post}, nothing changed.").yellow());
                }
                LikeOutcome::UnknownUser => {
                    println!("{}", format!("Unknown user: {user}").red());
                }
                LikeOutcome::UnknownPost => {
                    println!("{}", format!("Unknown post: {post}").red());
                }
            }
        }

        Commands::Allocate { budget } => {
            let network = load(&config)?;
            let allocation = selection::allocate_ads(network.ads(), budget);
            terminal::display_allocation(&allocation);
        }

        Commands::Cover { space } => {
            let network = load(&config)?;
            let plan = selection::optimize_cover(network.posts(), space);
            terminal::display_cover(&plan, &network.display_names());
        }

        Commands::Interactions { user } => {
            let network = load(&config)?;
            if network.user(&user).is_none() {
                println!("{}", format!("Unknown user: {user}").red());
                return Ok(());
            }
            let given: Vec<_> = network.likes().by_user(&user).collect();
            let received = network.likes().received_by_author(&user);
            terminal::display_interactions(&user, &given, &received, &network.display_names());
        }

        Commands::Recommend { user } => {
            let network = load(&config)?;
            if network.user(&user).is_none() {
                println!("{}", format!("Unknown user: {user}").red());
                return Ok(());
            }
            let graph = network.friend_graph();
            let recommendations = recommend::recommend_friends(&graph, &user, network.likes());
            terminal::display_recommendations(&user, &recommendations, &network.display_names());
        }

        Commands::Distances { user } => {
            let network = load(&config)?;
            if network.user(&user).is_none() {
                println!("{}", format!("Unknown user: {user}").red());
                return Ok(());
            }
            let graph = network.friend_graph();
            let distances = recommend::hop_distances(&graph, &user);
            let fof = recommend::friends_of_friends(&graph, &user);
            terminal::display_distances(&user, &distances, &fof, &network.display_names());
        }

        Commands::Path {
            origin,
            destination,
        } => {
            let network = load(&config)?;
            let graph = network.friend_graph();
            let influence = PathSearch::new(config.path_budget).run(&graph, &origin, &destination);
            if influence.as_ref().is_some_and(|p| p.truncated) {
                warn!(
                    budget = config.path_budget,
                    "Influence search hit its expansion budget, raise REACHGRAPH_PATH_BUDGET for an exhaustive search"
                );
            }
            let shortest = pathfinding::shortest_path(&graph, &origin, &destination);
            terminal::display_paths(
                &origin,
                &destination,
                influence.as_ref(),
                shortest.as_deref(),
                &network.display_names(),
            );
        }

        Commands::Top { k } => {
            let network = load(&config)?;
            let k = k.unwrap_or(config.top_k);
            let now = Utc::now();
            let top = ranking::top_by_relevance_at(network.posts(), k, now);
            terminal::display_top(&top, k, &network.display_names(), now);
        }

        Commands::Timeline => {
            let network = load(&config)?;
            let posts = ranking::chronological(network.posts());
            terminal::display_posts("Timeline", &posts, &network.display_names(), Utc::now());
        }
    }

    Ok(())
}

/// Load the snapshot, failing with a hint when it hasn't been created yet.
fn load(config: &Config) -> Result<Network> {
    config.require_data()?;
    store::open(&config.data_path)
}
