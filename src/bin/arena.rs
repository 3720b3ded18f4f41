use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_engine::ai::{Difficulty, SelectorKind};
use connect_four_engine::arena::run_arena;
use connect_four_engine::config::AppConfig;
use connect_four_engine::game::SeatConfig;

/// Pit two computer selectors against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play computer-vs-computer Connect Four matches")]
struct Cli {
    /// First contestant selector
    #[arg(long, default_value = "competitive")]
    first: SelectorKind,

    /// First contestant difficulty
    #[arg(long, default_value = "medium")]
    first_difficulty: Difficulty,

    /// Second contestant selector
    #[arg(long, default_value = "random")]
    second: SelectorKind,

    /// Second contestant difficulty
    #[arg(long, default_value = "easy")]
    second_difficulty: Difficulty,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Seed random selectors so the run can be reproduced
    #[arg(long)]
    seed: Option<u64>,

    /// Print the tallies as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(games) = cli.games {
        if games == 0 {
            bail!("--games must be > 0");
        }
        app_config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.arena.seed = Some(seed);
    }

    let first = SeatConfig::computer(cli.first, cli.first_difficulty);
    let second = SeatConfig::computer(cli.second, cli.second_difficulty);
    let stats = run_arena(&app_config.game, first, second, &app_config.arena)
        .context("running arena")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{first} vs {second} over {} games", stats.games);
        println!(
            "  first wins:  {:>4} ({:.0}%)",
            stats.first_wins,
            stats.first_win_rate() * 100.0
        );
        println!(
            "  second wins: {:>4} ({:.0}%)",
            stats.second_wins,
            stats.second_win_rate() * 100.0
        );
        println!(
            "  draws:       {:>4} ({:.0}%)",
            stats.draws,
            stats.draw_rate() * 100.0
        );
        println!("  avg length:  {:.1} moves", stats.average_game_length());
    }

    Ok(())
}
