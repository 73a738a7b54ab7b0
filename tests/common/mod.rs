//! Shared helpers for integration tests

#![allow(dead_code)]

use scrabble_session::board::Grid;
use scrabble_session::session::{GameSession, SessionConfig};
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a test log subscriber once
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Seeded session on a fresh grid with the embedded dictionary
pub fn seeded_session(players: usize, language: &str, seed: u64) -> GameSession {
    init_logging();
    let config = SessionConfig::new(players, language)
        .unwrap()
        .with_seed(seed);
    GameSession::start(&config, Grid::new()).unwrap()
}
