use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bedrock_tiers::api::{build_router, state::AppState};
use bedrock_tiers::calculate::{classify, mode_leaderboard, overall_score, RosterSummary};
use bedrock_tiers::config::AppConfig;
use bedrock_tiers::models::{Device, GameMode, Player, Region, SkillDimensions, Tier};
use bedrock_tiers::roster::{ProfileUpdate, Roster};
use bedrock_tiers::storage::{EntityType, JsonlWriter, StorageConfig};

#[derive(Parser)]
#[command(name = "bedrock-tiers")]
#[command(about = "Minecraft Bedrock PvP tier leaderboard")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Recompute points and ranks and write the merged leaderboard
    Rank {
        /// Leave skill assessments out of the leaderboard
        #[arg(long)]
        no_assessments: bool,

        /// Print the result without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Add a player with no results
    AddPlayer {
        name: String,

        #[arg(long, default_value = "NA")]
        region: Region,

        #[arg(long, default_value = "pc")]
        device: Device,
    },

    /// Record a tier result for a player, creating the player if needed
    Submit {
        player: String,
        mode: GameMode,
        tier: Tier,

        /// Raw score for the mode
        #[arg(long, default_value_t = 0.0)]
        score: f64,
    },

    /// Remove a player's result for one mode
    Unsubmit { player: String, mode: GameMode },

    /// Edit a player's profile
    Profile {
        player: String,

        #[arg(long)]
        region: Option<Region>,

        #[arg(long)]
        device: Option<Device>,

        #[arg(long)]
        platform_username: Option<String>,

        #[arg(long)]
        external_id: Option<String>,
    },

    /// Exclude a player from the rankings
    Ban { player: String },

    /// Restore a banned player
    Unban { player: String },

    /// Delete a player and all of its results
    Delete { player: String },

    /// Record a skill assessment (five scores, each 1-100)
    Assess {
        username: String,
        combat: f64,
        movement: f64,
        game_sense: f64,
        bridging: f64,
        consistency: f64,
    },

    /// Classify an overall score, or five dimension scores, on the skill ladder
    Classify {
        #[arg(required = true, num_args = 1..=5, allow_negative_numbers = true)]
        scores: Vec<f64>,
    },

    /// Print the leaderboard
    Show {
        /// Show one game mode instead of the overall ranking
        #[arg(long)]
        mode: Option<GameMode>,

        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    let log_level = cli.log_level.clone().unwrap_or(config.log_level.clone());

    init_tracing(&log_level, cli.json_logs);
    tracing::info!("Starting bedrock-tiers v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let app = build_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Serving leaderboard on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Rank {
            no_assessments,
            dry_run,
        } => {
            let roster = Roster::load(&storage)?;
            let include = config.ranking.include_assessments && !no_assessments;
            let leaderboard = roster.leaderboard(&config.ranking.merge_options(), include);

            print_overall(&leaderboard, 20);
            print_summary(&RosterSummary::from_players(&leaderboard));

            if dry_run {
                println!("\n(dry run - no data written to disk)");
            } else {
                roster.save(&storage)?;
                JsonlWriter::<Player>::for_entity(&storage, EntityType::Leaderboard)
                    .write_all(&leaderboard)?;
            }
        }
        Commands::AddPlayer {
            name,
            region,
            device,
        } => {
            let mut roster = Roster::load(&storage)?;
            let player = roster.add_player(&name, region, device)?;
            println!("Added {} ({}, {})", player.name, player.region, player.device);
            roster.save(&storage)?;
        }
        Commands::Submit {
            player,
            mode,
            tier,
            score,
        } => {
            let mut roster = Roster::load(&storage)?;
            let player = roster.submit_result(&player, mode, tier, score)?;
            println!(
                "{}: {} {} -> {} points, rank #{}",
                player.name,
                mode,
                tier,
                player.global_points,
                format_rank(player.overall_rank)
            );
            roster.save(&storage)?;
        }
        Commands::Unsubmit { player, mode } => {
            let mut roster = Roster::load(&storage)?;
            if roster.remove_result(&player, mode)? {
                println!("Removed {} result for {}", mode, player);
                roster.save(&storage)?;
            } else {
                println!("{} has no {} result", player, mode);
            }
        }
        Commands::Profile {
            player,
            region,
            device,
            platform_username,
            external_id,
        } => {
            let mut roster = Roster::load(&storage)?;
            let update = ProfileUpdate {
                region,
                device,
                platform_username,
                external_id,
            };
            let player = roster.update_profile(&player, update)?;
            println!(
                "{}: region {}, device {}, platform username {}",
                player.name,
                player.region,
                player.device,
                player.platform_username.as_deref().unwrap_or("-")
            );
            roster.save(&storage)?;
        }
        Commands::Ban { player } => {
            let mut roster = Roster::load(&storage)?;
            roster.set_banned(&player, true)?;
            roster.save(&storage)?;
            println!("Banned {}", player);
        }
        Commands::Unban { player } => {
            let mut roster = Roster::load(&storage)?;
            roster.set_banned(&player, false)?;
            roster.save(&storage)?;
            println!("Unbanned {}", player);
        }
        Commands::Delete { player } => {
            let mut roster = Roster::load(&storage)?;
            let removed = roster.delete_player(&player)?;
            roster.save(&storage)?;
            println!(
                "Deleted {} and {} results",
                removed.name,
                removed.assignments.len()
            );
        }
        Commands::Assess {
            username,
            combat,
            movement,
            game_sense,
            bridging,
            consistency,
        } => {
            let dimensions =
                SkillDimensions::new(combat, movement, game_sense, bridging, consistency);
            let mut roster = Roster::load(&storage)?;
            let assessment = roster.upsert_assessment(&username, dimensions)?;
            println!(
                "{}: overall {:.2} -> {} ({} on the main ladder)",
                assessment.username,
                assessment.overall_score,
                assessment.tier,
                assessment.tier.to_tier()
            );
            roster.save(&storage)?;
        }
        Commands::Classify { scores } => {
            let score = match scores.as_slice() {
                [score] => *score,
                [a, b, c, d, e] => {
                    let dimensions = SkillDimensions::new(*a, *b, *c, *d, *e);
                    dimensions.validate()?;
                    overall_score(&dimensions)
                }
                _ => bail!("Expected one overall score or five dimension scores"),
            };
            let tier = classify(score);
            println!(
                "{:.2} -> {} ({} points)",
                score,
                tier,
                tier.to_tier().points()
            );
        }
        Commands::Show { mode, limit } => {
            let roster = Roster::load(&storage)?;
            let leaderboard = roster.leaderboard(
                &config.ranking.merge_options(),
                config.ranking.include_assessments,
            );

            match mode {
                Some(mode) => {
                    println!("\n=== {} ===", mode);
                    for entry in mode_leaderboard(&leaderboard, mode).iter().take(limit) {
                        println!(
                            "{:>4}. {:<20} {:<10} {:>6.2}  {}",
                            entry.position, entry.name, entry.tier, entry.score, entry.region
                        );
                    }
                }
                None => {
                    print_overall(&leaderboard, limit);
                    print_summary(&RosterSummary::from_players(&leaderboard));
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn format_rank(rank: Option<u32>) -> String {
    rank.map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_overall(players: &[Player], limit: usize) {
    println!("\n=== Overall ===");
    for player in players
        .iter()
        .filter(|p| p.overall_rank.is_some())
        .take(limit)
    {
        let tiers: Vec<String> = player
            .assignments
            .iter()
            .map(|a| format!("{}:{}", a.mode, a.tier))
            .collect();
        println!(
            "{:>4}. {:<20} {:>4} pts  {:<4} {}{}",
            format_rank(player.overall_rank),
            player.name,
            player.global_points,
            player.region,
            tiers.join(" "),
            if player.synthetic { "  (assessment)" } else { "" }
        );
    }
}

fn print_summary(summary: &RosterSummary) {
    println!("\n=== Summary ===");
    println!("Players:          {}", summary.total_players);
    println!("Ranked:           {}", summary.ranked_players);
    println!("Banned:           {}", summary.banned_players);
    println!("From assessments: {}", summary.synthetic_players);
    if let Some(top) = &summary.top_player {
        println!("Top player:       {} ({} pts)", top, summary.top_points);
    }
}
