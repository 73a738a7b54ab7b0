//! Interactive text mode
//!
//! Reads one command per line, applies it to the session and redraws the table.

use super::action::Action;
use crate::board::Grid;
use crate::core::Position;
use crate::output::{print_scoreboard, print_table, print_turn_report, print_winner};
use crate::session::{GameSession, SessionConfig, SetupError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// Settings shared by every game started from the prompt
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub dictionary: Option<PathBuf>,
    /// Save here after every turn change
    pub autosave: Option<PathBuf>,
}

impl PlayOptions {
    /// Build a session config from prompt answers
    ///
    /// # Errors
    /// Same as [`SessionConfig::new`].
    pub fn config(&self, players: usize, language: &str) -> Result<SessionConfig, SetupError> {
        let mut config = SessionConfig::new(players, language)?;
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.dictionary {
            config = config.with_dictionary(path);
        }
        Ok(config)
    }
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    GameOver,
    NewGame,
    Quit,
}

/// Run the interactive loop until the player quits
///
/// # Errors
///
/// Returns an error if reading input fails or a new game cannot be set up
/// (for instance when the dictionary file disappeared).
pub fn run_play(mut session: GameSession, options: &PlayOptions) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Word Game - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        print_table(&session);

        let prompt = session
            .active_player()
            .map_or_else(|| "Command".to_string(), |p| format!("{} >", p.name()));
        let input = get_user_input(&prompt)?;
        let action = match input.parse::<Action>() {
            Ok(action) => action,
            Err(msg) => {
                println!("{}", msg.yellow());
                continue;
            }
        };

        match apply(&mut session, action, options) {
            Flow::Continue => {}
            Flow::NewGame => {
                session = prompt_new_session(options)?;
                println!("\n🔄 New game started!\n");
            }
            Flow::GameOver => {
                print_winner(&session);
                if confirm("Play again? (yes/no)")? {
                    session = prompt_new_session(options)?;
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            Flow::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Ask for a language and player count until they describe a valid game
///
/// # Errors
///
/// Returns an error on I/O failure or if the game cannot be dealt.
pub fn prompt_new_session(options: &PlayOptions) -> Result<GameSession> {
    loop {
        let language = get_user_input("Language (FR/EN)")?;
        let players = get_user_input("Number of players (2-4)")?;
        let Ok(players) = players.parse::<usize>() else {
            println!("{}", format!("'{players}' is not a number").yellow());
            continue;
        };

        match options.config(players, &language) {
            Ok(config) => return Ok(GameSession::start(&config, Grid::new())?),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }
}

/// Apply one parsed action and report it
pub(crate) fn apply(session: &mut GameSession, action: Action, options: &PlayOptions) -> Flow {
    let result = match action {
        Action::Select(slot) => session.select_rack_tile(slot),
        Action::Place { x, y } => match session.propose_placement(Position::new(x, y)) {
            Ok(true) => Ok(()),
            Ok(false) => {
                println!("{}", format!("✗ Cannot place a tile at ({x}, {y})").yellow());
                Ok(())
            }
            Err(err) => Err(err),
        },
        Action::Commit => match session.commit_turn() {
            Ok(report) => {
                print_turn_report(&report);
                if report.outcome.is_success() {
                    autosave(session, options);
                }
                if report.game_over {
                    return Flow::GameOver;
                }
                Ok(())
            }
            Err(err) => Err(err),
        },
        Action::Reset => session.abandon_turn(),
        Action::Pass => session.pass_turn().map(|()| {
            autosave(session, options);
        }),
        Action::Shuffle => session.shuffle_rack(),
        Action::Scores => {
            print_scoreboard(&session.scoreboard());
            Ok(())
        }
        Action::Save(path) => {
            match path.or_else(|| options.autosave.clone()) {
                Some(path) => match session.save(&path) {
                    Ok(()) => println!("💾 Saved to {}", path.display()),
                    Err(err) => println!("{}", format!("Save failed: {err}").red()),
                },
                None => println!("{}", "Give a path: save <file>".yellow()),
            }
            Ok(())
        }
        Action::New => return Flow::NewGame,
        Action::Help => {
            print_help();
            Ok(())
        }
        Action::Quit => return Flow::Quit,
    };

    if let Err(err) = result {
        println!("{}", err.to_string().red());
    }
    Flow::Continue
}

fn autosave(session: &GameSession, options: &PlayOptions) {
    if let Some(path) = &options.autosave
        && let Err(err) = session.save(path)
    {
        warn!(%err, "autosave failed");
        println!("{}", format!("Autosave failed: {err}").red());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  select <slot>    pick a tile from your rack (s)");
    println!("  place <x> <y>    put the selected tile on the board (p)");
    println!("  play             submit the tiles on the board (c)");
    println!("  reset            take your tiles back (r)");
    println!("  pass             skip your turn");
    println!("  shuffle          reorder your rack");
    println!("  scores           show the scoreboard");
    println!("  save [file]      save the game");
    println!("  new              start over");
    println!("  quit             leave (q)\n");
}

fn confirm(prompt: &str) -> Result<bool> {
    let answer = get_user_input(prompt)?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes" | "o" | "oui"))
}

/// Read one trimmed line; end of input reads as `quit`
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_string())
}
