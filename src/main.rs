//! Command line front end for the pitch-elo rating engine
//!
//! Looks up ranks, computes ELO deltas and team averages, and balances
//! rosters from the shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitch_elo::config::AppConfig;
use pitch_elo::rating::{
    auto_balance, can_captain, elo_delta, expected_score, progress_within_tier, rating_gap,
    team_average_rating, RankTable,
};
use pitch_elo::Rating;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

/// Pitch ELO - rank tiers and rating updates for football matchmaking
#[derive(Parser)]
#[command(
    name = "pitch-elo",
    version,
    about = "ELO ratings, rank tiers and team balancing for recreational football matches"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the rank tier for a rating
    Rank {
        #[arg(allow_negative_numbers = true)]
        rating: Rating,
    },
    /// Rating change after a match against an opponent
    Delta {
        #[arg(allow_negative_numbers = true)]
        player: Rating,
        #[arg(allow_negative_numbers = true)]
        opponent: Rating,
        /// The player lost instead of won
        #[arg(long)]
        lost: bool,
        /// K-factor override
        #[arg(short, long)]
        k_factor: Option<i32>,
    },
    /// Average rating of a team
    Average {
        #[arg(allow_negative_numbers = true)]
        ratings: Vec<Rating>,
    },
    /// Split ratings into two balanced teams
    Balance {
        #[arg(short, long, default_value_t = 5)]
        per_team: usize,
        #[arg(required = true)]
        ratings: Vec<Rating>,
    },
    /// Print the rank table
    Table,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?.with_env_overrides()?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    pitch_elo::config::validate_config(&config)?;
    Ok(config)
}

fn print_output(as_json: bool, value: serde_json::Value, text: String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// Outcome of a single match from the player's side
fn delta_summary(player: Rating, opponent: Rating, won: bool, k: i32) -> serde_json::Value {
    let delta = elo_delta(player, opponent, won, k);
    json!({
        "player": player,
        "opponent": opponent,
        "won": won,
        "k_factor": k,
        "expected_score": expected_score(player, opponent),
        "delta": delta,
        "new_rating": player.saturating_add(delta),
    })
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let table = RankTable::standard();

    match &args.command {
        Command::Rank { rating } => {
            let tier = table.rank_for_rating(*rating);
            let progress = progress_within_tier(*rating, tier);
            let ranked = table.find_rank(*rating).is_ok();
            if !ranked {
                debug!("Rating {} is outside the rank table", rating);
            }

            let text = format!(
                "{} ({}) tier {} [{}-{}] {:.1}%{}",
                tier.name,
                tier.category,
                tier.tier,
                tier.min_elo,
                tier.max_elo,
                progress,
                if ranked { "" } else { " (unranked, lowest tier shown)" }
            );
            print_output(
                args.json,
                json!({
                    "rating": rating,
                    "rank": tier,
                    "progress": progress,
                    "ranked": ranked,
                    "next": table.next_tier(tier).map(|next| next.name),
                    "can_captain": can_captain(*rating, config.rating.captain_min_rating),
                }),
                text,
            )
        }
        Command::Delta {
            player,
            opponent,
            lost,
            k_factor,
        } => {
            let k = k_factor.unwrap_or(config.rating.k_factor);
            pitch_elo::rating::EloConfig::new(k).validate()?;

            let summary = delta_summary(*player, *opponent, !lost, k);
            info!("Delta for {} vs {}: {}", player, opponent, summary);

            let text = format!(
                "expected {:.4}, delta {:+}, new rating {}",
                summary["expected_score"].as_f64().unwrap_or_default(),
                summary["delta"].as_i64().unwrap_or_default(),
                summary["new_rating"]
            );
            print_output(args.json, summary, text)
        }
        Command::Average { ratings } => {
            let average = team_average_rating(ratings);
            print_output(
                args.json,
                json!({ "players": ratings.len(), "average": average }),
                average.to_string(),
            )
        }
        Command::Balance { per_team, ratings } => {
            let (team_one, team_two) = auto_balance(ratings, *per_team);
            let one_avg = team_average_rating(&team_one);
            let two_avg = team_average_rating(&team_two);
            let gap = rating_gap(&team_one, &team_two);

            print_output(
                args.json,
                json!({
                    "team_one": { "ratings": team_one, "average": one_avg },
                    "team_two": { "ratings": team_two, "average": two_avg },
                    "gap": gap,
                }),
                format!(
                    "team 1 {:?} avg {}\nteam 2 {:?} avg {}\ngap {}",
                    team_one, one_avg, team_two, two_avg, gap
                ),
            )
        }
        Command::Table => {
            let text = table
                .tiers()
                .iter()
                .map(|tier| {
                    format!(
                        "{:>2}  {:<13} {:<9} {:>4}-{:<4}  {}",
                        tier.tier,
                        tier.name,
                        tier.category,
                        tier.min_elo,
                        tier.max_elo,
                        tier.description
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            print_output(args.json, json!(table.tiers()), text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("Loaded configuration: {:?}", config);
    run(&args, &config)
}
