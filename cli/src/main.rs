use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, prelude::*, Registry};
use xbetza::{compile, generate, Coord, GridBoard};

use cli::{base_atoms_table, move_atoms_table, render_moves};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the base-atom letters.
    Atoms,
    /// Compile a notation and show its move atoms.
    Compile { notation: String },
    /// Show the destinations of a notation from one square of a board file.
    Moves {
        notation: String,
        /// Board file: one row per line, '.' empty, 'F' friendly, 'E' enemy.
        #[arg(short, long)]
        board: PathBuf,
        #[arg(short, long)]
        x: i32,
        #[arg(short, long)]
        y: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    enable_logging(cli.verbose)?;

    match cli.command {
        Commands::Atoms => {
            println!("{}", base_atoms_table());
            Ok(())
        }
        Commands::Compile { notation } => cli_compile(&notation),
        Commands::Moves {
            notation,
            board,
            x,
            y,
        } => cli_moves(&notation, &board, x, y),
    }
}

fn cli_compile(notation: &str) -> Result<()> {
    let atoms =
        compile(notation).with_context(|| format!("Couldn't compile notation: `{}`", notation))?;
    println!("{}", move_atoms_table(&atoms));
    Ok(())
}

fn cli_moves(notation: &str, board_path: &Path, x: i32, y: i32) -> Result<()> {
    let atoms =
        compile(notation).with_context(|| format!("Couldn't compile notation: `{}`", notation))?;

    let board_str = fs::read_to_string(board_path)
        .with_context(|| format!("Couldn't read board file {:?}", board_path))?;
    let board: GridBoard = board_str
        .parse()
        .with_context(|| format!("Couldn't parse board file {:?}", board_path))?;
    debug!("board {}x{}:\n{:?}", board.width(), board.height(), board);

    let moves = generate(&atoms, x, y, &board);
    info!("{} destinations from {},{}", moves.len(), x, y);

    print!("{}", render_moves(&board, Coord::new(x, y), &moves));
    for mve in moves {
        println!("{}", mve);
    }
    Ok(())
}

fn enable_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))?
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(filter);

    Registry::default().with(stderr_layer).try_init()?;

    Ok(())
}
