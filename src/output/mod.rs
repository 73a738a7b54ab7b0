//! Terminal output formatting
//!
//! Rendering of the board, racks and scores. The session never prints; the
//! command layer calls into here after each action.

pub mod display;
pub mod formatters;

pub use display::{print_scoreboard, print_table, print_turn_report, print_winner};
