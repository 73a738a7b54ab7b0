//! Scrabble Session
//!
//! Turn-based word game sessions: tile bag, player racks, a placement board,
//! dictionary checks and scoring, with save/restore of whole games.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_session::board::CENTER;
//! use scrabble_session::session::GameSession;
//!
//! let mut session = GameSession::initialize(2, "EN").unwrap();
//!
//! session.select_rack_tile(0).unwrap();
//! assert!(session.propose_placement(CENTER).unwrap());
//!
//! let report = session.commit_turn().unwrap();
//! println!("{:?}", report.outcome);
//! assert!(session.is_conserved());
//! ```

// Core domain types
pub mod core;

// Placement surface
pub mod board;

// Word lists and dictionaries
pub mod wordlists;

// Game session state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
