//! Display functions for session state and turn results

use super::formatters::{rack_indices, rack_line, score_row};
use crate::board::Board;
use crate::session::{GameSession, ScoreLine, TurnOutcome, TurnReport};
use colored::Colorize;
use std::fmt::Display;

/// Print the board followed by the active player's rack
pub fn print_table<B: Board + Display>(session: &GameSession<B>) {
    println!("\n{}", session.board());

    if let Some(player) = session.active_player() {
        println!(
            "{} {}  {}",
            "▶".bright_cyan(),
            player.name().bright_yellow().bold(),
            format!("({} pts, {} tiles left in bag)", player.points(), session.bag().remaining_count())
                .bright_black()
        );
        println!("  {}", rack_line(player, session.selection()));
        println!("  {}", rack_indices(player).bright_black());
    }
}

/// Print the scoreboard
pub fn print_scoreboard(scoreboard: &[ScoreLine]) {
    let width = scoreboard.iter().map(|l| l.name.len()).max().unwrap_or(0);

    println!("\n{}", "─".repeat(40).cyan());
    for line in scoreboard {
        let row = score_row(line, width);
        if line.is_leading {
            println!("  {}", row.green().bold());
        } else {
            println!("  {row}");
        }
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the result of a commit
pub fn print_turn_report(report: &TurnReport) {
    match &report.outcome {
        TurnOutcome::NoTilesPlaced => {
            println!("{}", "❌ No tiles are placed on the board.".red());
        }
        TurnOutcome::IllegalPlacement => {
            println!("{}", "❌ Those tile positions are not valid.".red());
        }
        TurnOutcome::IllegalWord { rejected, .. } => {
            println!(
                "{} {}",
                "❌ Not in the dictionary:".red(),
                rejected.join(", ").bright_white().bold()
            );
        }
        TurnOutcome::Success { words, score } => {
            println!(
                "{} {}  {}",
                "✅ Words formed:".green(),
                words.join(", ").bright_white().bold(),
                format!("+{score} pts").bright_yellow().bold()
            );
        }
    }

    print_scoreboard(&report.scoreboard);
}

/// Print the end-of-game banner
pub fn print_winner<B: Board>(session: &GameSession<B>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if let Some(winner) = session.winner() {
        println!(
            "    🏆  {} wins with {} points!",
            winner.name().bright_green().bold(),
            winner.points().to_string().bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
