//! Tile Swap Puzzle
//!
//! A picture is cut into 50 tiles which are shuffled and turned. Click a tile
//! to select it, click it again to turn it, or click another tile to swap the
//! two. The binary plays the game in an interactive window and offers a few
//! text subcommands for inspecting layouts and boards.

mod visualization;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tileswap::images::ImageCatalog;
use tileswap::session::SessionConfig;
use tileswap::{compute_layout, grid, solver, PuzzleState, DEFAULT_TILE_COUNT};

/// Sliding and turning tile puzzle.
#[derive(Parser)]
#[command(name = "tileswap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play in an interactive window.
    Play {
        /// Picture sources to cycle through; defaults to the bundled list.
        #[arg(long = "image", value_name = "SOURCE")]
        images: Vec<String>,
        /// Seed for reproducible puzzles.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the board geometry for a viewport size.
    Layout {
        #[arg(long, default_value = "1920")]
        width: f64,
        #[arg(long, default_value = "1080")]
        height: f64,
    },
    /// Print a freshly scrambled board.
    Shuffle {
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Lay the board out 10 wide instead of 5.
        #[arg(long)]
        landscape: bool,
    },
    /// Scramble a board and report the clicks needed to solve it.
    Solve {
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Some(Command::Play { images, seed }) => run_play(images, seed)?,
        Some(Command::Layout { width, height }) => print!("{}", layout_report(width, height)),
        Some(Command::Shuffle { seed, landscape }) => print!("{}", shuffle_report(seed, landscape)),
        Some(Command::Solve { seed }) => print!("{}", solve_report(seed)?),
        None => run_play(Vec::new(), None)?,
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Opens the game window.
fn run_play(images: Vec<String>, seed: Option<u64>) -> Result<()> {
    let images = if images.is_empty() {
        ImageCatalog::default()
    } else {
        ImageCatalog::new(images).context("invalid picture list")?
    };
    let config = SessionConfig {
        images,
        seed,
        ..SessionConfig::default()
    };

    info!("Controls: arrows move, Space selects/turns/swaps, Enter closes dialogs, R reshuffles");
    visualization::play(config)
}

/// Geometry summary plus the CSS grid templates.
fn layout_report(width: f64, height: f64) -> String {
    let layout = compute_layout(width, height);
    format!(
        "{}\ngrid-template-columns: {}\ngrid-template-rows: {}\n",
        layout.summary(),
        layout.grid_template_columns(),
        layout.grid_template_rows()
    )
}

fn shuffle_report(seed: u64, landscape: bool) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
    let columns = if landscape { 10 } else { 5 };
    format!(
        "{} of {} tiles out of place\n{}",
        state.misplaced_count(),
        state.len(),
        grid::format_board(&state, columns)
    )
}

/// Scrambles a board, replays the planned clicks and reports the totals.
fn solve_report(seed: u64) -> Result<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
    let plan = solver::plan_clicks(&state);

    for &id in &plan.clicks {
        state.on_tile_click(id);
    }
    anyhow::ensure!(
        state.is_solved(),
        "planned clicks left {} tiles out of place",
        state.misplaced_count()
    );

    Ok(format!(
        "seed {}: {} swaps, {} quarter turns, {} clicks\n",
        seed,
        plan.swaps,
        plan.quarter_turns,
        plan.clicks.len()
    ))
}
