//! Command implementations

pub mod action;
pub mod inspect;
pub mod play;

pub use action::Action;
pub use inspect::{SaveSummary, inspect_save};
pub use play::{PlayOptions, prompt_new_session, run_play};
