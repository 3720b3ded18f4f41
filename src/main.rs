use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_engine::ai::{Difficulty, SelectorKind};
use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{GameConfig, GameResult, GameSession, ReplayMove, SeatConfig};

/// Play Connect Four in the terminal against a human or the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Red controller: human, random, minimax, negascout or competitive
    #[arg(long)]
    red: Option<String>,

    /// Yellow controller: human, random, minimax, negascout or competitive
    #[arg(long)]
    yellow: Option<String>,

    /// Override difficulty of computer seats: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Comma-separated columns to replay before play starts
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Print a JSON snapshot after every move instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(red) = &cli.red {
        app_config.red = parse_controller(red, app_config.red)?;
    }
    if let Some(yellow) = &cli.yellow {
        app_config.yellow = parse_controller(yellow, app_config.yellow)?;
    }
    if let Some(difficulty) = cli.difficulty {
        app_config.red = with_difficulty(app_config.red, difficulty);
        app_config.yellow = with_difficulty(app_config.yellow, difficulty);
    }

    let replay: Vec<ReplayMove> = cli.moves.iter().copied().map(ReplayMove::from).collect();
    let mut session =
        GameSession::start(&app_config.game, app_config.red, app_config.yellow, &replay)
            .context("starting game")?;

    run(&mut session, &app_config.game, cli.json)
}

fn run(session: &mut GameSession, game: &GameConfig, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    render(session, json)?;
    while let Some(seat) = session.active_seat() {
        let controller = session.seat_config(seat);
        if controller.is_human() {
            write!(stdout, "{seat} to move, column 0-{} (q to quit): ", game.cols - 1)?;
            stdout.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            let Ok(column) = input.parse::<usize>() else {
                println!("'{input}' is not a column number");
                continue;
            };
            if let Err(err) = session.submit_move(seat, column) {
                println!("{err}");
                continue;
            }
        } else {
            let report = session.play_computer_turn()?;
            println!("{seat} ({controller}) plays column {}", report.column);
        }
        render(session, json)?;
    }

    match session.result() {
        GameResult::Win(seat) => println!("{seat} wins!"),
        GameResult::Draw => println!("Draw!"),
        GameResult::InProgress => {}
    }
    Ok(())
}

fn render(session: &GameSession, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&session.snapshot())?);
    } else {
        println!("{}\n", session.board());
    }
    Ok(())
}

fn parse_controller(value: &str, current: SeatConfig) -> Result<SeatConfig> {
    if value.eq_ignore_ascii_case("human") {
        return Ok(SeatConfig::Human);
    }
    let selector: SelectorKind = match value.parse() {
        Ok(selector) => selector,
        Err(err) => bail!("{err} or 'human'"),
    };
    let difficulty = match current {
        SeatConfig::Computer { difficulty, .. } => difficulty,
        SeatConfig::Human => Difficulty::default(),
    };
    Ok(SeatConfig::computer(selector, difficulty))
}

fn with_difficulty(seat: SeatConfig, difficulty: Difficulty) -> SeatConfig {
    match seat {
        SeatConfig::Computer { selector, .. } => SeatConfig::computer(selector, difficulty),
        SeatConfig::Human => SeatConfig::Human,
    }
}
