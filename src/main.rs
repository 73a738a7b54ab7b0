//! Scrabble Session - CLI
//!
//! Play a word game at the terminal, resume a saved game or inspect a save file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scrabble_session::{
    board::Grid,
    commands::{PlayOptions, inspect_save, prompt_new_session, run_play},
    output::print_scoreboard,
    session::GameSession,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scrabble_session",
    about = "Turn-based word game for 2 to 4 players",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game (default)
    Play {
        /// Number of players, 2 to 4 (asked for when omitted)
        #[arg(short, long)]
        players: Option<usize>,

        /// Tile set and dictionary: FR or EN (asked for when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Seed for reproducible tile draws
        #[arg(long)]
        seed: Option<u64>,

        /// Word list file replacing the built-in dictionary
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Save the game here after every turn
        #[arg(long)]
        autosave: Option<PathBuf>,
    },

    /// Continue a saved game
    Resume {
        /// Save file to load
        path: PathBuf,

        /// Seed for reproducible tile draws after loading
        #[arg(long)]
        seed: Option<u64>,

        /// Keep saving to the same file after every turn
        #[arg(long)]
        autosave: bool,
    },

    /// Print a summary of a save file
    Inspect {
        /// Save file to read
        path: PathBuf,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let command = cli.command.unwrap_or(Commands::Play {
        players: None,
        language: None,
        seed: None,
        dictionary: None,
        autosave: None,
    });

    match command {
        Commands::Play {
            players,
            language,
            seed,
            dictionary,
            autosave,
        } => {
            let options = PlayOptions {
                seed,
                dictionary,
                autosave,
            };
            run_play_command(players, language.as_deref(), &options)
        }
        Commands::Resume {
            path,
            seed,
            autosave,
        } => run_resume_command(path, seed, autosave),
        Commands::Inspect { path } => run_inspect_command(&path),
    }
}

fn run_play_command(
    players: Option<usize>,
    language: Option<&str>,
    options: &PlayOptions,
) -> Result<()> {
    let session = match (players, language) {
        (Some(players), Some(language)) => {
            let config = options.config(players, language)?;
            GameSession::start(&config, Grid::new())?
        }
        _ => prompt_new_session(options)?,
    };
    run_play(session, options)
}

fn run_resume_command(path: PathBuf, seed: Option<u64>, autosave: bool) -> Result<()> {
    let session: GameSession = GameSession::load(&path, seed)
        .with_context(|| format!("could not resume {}", path.display()))?;

    let options = PlayOptions {
        seed,
        dictionary: None,
        autosave: autosave.then_some(path),
    };
    run_play(session, &options)
}

fn run_inspect_command(path: &Path) -> Result<()> {
    let summary =
        inspect_save(path).with_context(|| format!("could not read {}", path.display()))?;

    println!("\n{} {}", "Save file:".bold(), path.display());
    println!("  Language:      {}", summary.language);
    println!(
        "  Active player: {}",
        summary.active.as_deref().unwrap_or("none")
    );
    println!("  Tiles in bag:  {}", summary.bag_remaining);
    println!("  Tiles placed:  {}", summary.board_tiles);
    if summary.game_over {
        println!("  {}", "Game over".bright_red().bold());
    }
    print_scoreboard(&summary.scoreboard);
    Ok(())
}
