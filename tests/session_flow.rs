//! End-to-end turn scenarios through the public API

mod common;

use common::{init_logging, seeded_session};
use scrabble_session::board::{Board, CENTER, Grid};
use scrabble_session::core::{InvalidLanguage, Position, RACK_CAPACITY};
use scrabble_session::session::{
    GameSession, SessionConfig, SessionError, SetupError, TurnOutcome,
};
use std::fs;

#[test]
fn setup_deals_only_the_first_player() {
    let session = seeded_session(3, "FR", 1);

    let active = session.active_index().unwrap();
    for (i, player) in session.players().iter().enumerate() {
        let expected = if i == active { RACK_CAPACITY } else { 0 };
        assert_eq!(player.tile_count(), expected);
        assert_eq!(player.points(), 0);
        assert_eq!(player.name(), format!("Player {}", i + 1));
    }
    assert_eq!(session.bag().remaining_count(), 93);
    assert_eq!(session.board().tile_count(), 0);
    assert!(session.is_conserved());
}

#[test]
fn setup_rejects_bad_input() {
    init_logging();
    assert!(matches!(
        GameSession::initialize(9, "xx"),
        Err(SetupError::InvalidLanguage(InvalidLanguage(_)))
    ));
    assert!(matches!(
        GameSession::initialize(1, "en"),
        Err(SetupError::InvalidPlayerCount(1))
    ));
    assert!(matches!(
        GameSession::initialize(5, "fr"),
        Err(SetupError::InvalidPlayerCount(5))
    ));
}

#[test]
fn passing_rotates_in_seat_order() {
    let mut session = seeded_session(4, "EN", 2);
    let first = session.active_index().unwrap();

    for step in 1..=8 {
        session.pass_turn().unwrap();
        assert_eq!(session.active_index(), Some((first + step) % 4));
    }
    assert!(session.players().iter().all(|p| p.tile_count() == RACK_CAPACITY));
    assert_eq!(session.bag().remaining_count(), 98 - 4 * RACK_CAPACITY);
}

#[test]
fn abandon_restores_original_slots_and_is_idempotent() {
    let mut session = seeded_session(2, "EN", 3);
    let rack_before = session.active_player().unwrap().rack().clone();

    session.select_rack_tile(3).unwrap();
    assert!(session.propose_placement(CENTER).unwrap());
    session.select_rack_tile(1).unwrap();
    assert!(session.propose_placement(Position::new(8, 7)).unwrap());
    session.select_rack_tile(0).unwrap();

    session.abandon_turn().unwrap();
    let after_once = session.snapshot();
    session.abandon_turn().unwrap();

    assert_eq!(session.snapshot(), after_once);
    assert_eq!(session.active_player().unwrap().rack(), &rack_before);
    assert_eq!(session.selection(), None);
    assert_eq!(session.board().tile_count(), 0);
}

#[test]
fn placing_without_selection_is_an_error() {
    let mut session = seeded_session(2, "FR", 4);
    assert_eq!(
        session.propose_placement(CENTER),
        Err(SessionError::NoSelection)
    );
}

#[test]
fn occupied_cell_rejects_and_keeps_tile_selected() {
    let mut session = seeded_session(2, "FR", 5);
    session.select_rack_tile(0).unwrap();
    assert!(session.propose_placement(CENTER).unwrap());

    session.select_rack_tile(1).unwrap();
    assert!(!session.propose_placement(CENTER).unwrap());
    assert_eq!(session.selection(), Some(1));
    assert!(session.active_player().unwrap().tile_at(1).is_some());
    assert!(!session.propose_placement(Position::new(15, 0)).unwrap());
}

#[test]
fn word_from_custom_dictionary_scores_and_advances() {
    init_logging();
    let preview = seeded_session(2, "EN", 6);
    let rack = preview.active_player().unwrap().rack().clone();
    let (first, second) = (rack[0].clone().unwrap(), rack[1].clone().unwrap());
    let word = format!("{}{}", first.letter(), second.letter());

    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, format!("# custom\n{}\n", word.to_lowercase())).unwrap();

    let config = SessionConfig::new(2, "EN")
        .unwrap()
        .with_seed(6)
        .with_dictionary(&list);
    let mut session = GameSession::start(&config, Grid::new()).unwrap();
    let mover = session.active_index().unwrap();

    session.select_rack_tile(0).unwrap();
    session.propose_placement(CENTER).unwrap();
    session.select_rack_tile(1).unwrap();
    session.propose_placement(Position::new(CENTER.x + 1, CENTER.y)).unwrap();

    let report = session.commit_turn().unwrap();
    let score = first.value() + second.value();
    assert_eq!(
        report.outcome,
        TurnOutcome::Success {
            words: vec![word],
            score
        }
    );
    assert_eq!(session.players()[mover].points(), score);
    assert_eq!(session.active_index(), Some((mover + 1) % 2));
    assert_eq!(session.players()[mover].tile_count(), RACK_CAPACITY - 2);
    assert_eq!(session.board().tile_count(), 2);
    assert_eq!(session.bag().remaining_count(), 98 - 2 * RACK_CAPACITY);
    assert!(report.scoreboard[mover].is_leading == (score > 0));
    assert!(session.is_conserved());
}

#[test]
fn unknown_word_is_rolled_back() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, "# nothing a two-tile move can spell\nzzzzzzz\n").unwrap();

    let config = SessionConfig::new(2, "EN")
        .unwrap()
        .with_seed(7)
        .with_dictionary(&list);
    let mut session = GameSession::start(&config, Grid::new()).unwrap();
    let rack_before = session.active_player().unwrap().rack().clone();
    let bag_before = session.bag().clone();
    let scores_before = session.scoreboard();
    let active = session.active_index();
    let word: String = rack_before[..2]
        .iter()
        .flatten()
        .map(|tile| tile.letter())
        .collect();

    session.select_rack_tile(0).unwrap();
    session.propose_placement(CENTER).unwrap();
    session.select_rack_tile(1).unwrap();
    session.propose_placement(Position::new(CENTER.x + 1, CENTER.y)).unwrap();
    let report = session.commit_turn().unwrap();

    assert_eq!(
        report.outcome,
        TurnOutcome::IllegalWord {
            words: vec![word.clone()],
            rejected: vec![word],
        }
    );
    assert_eq!(session.active_player().unwrap().rack(), &rack_before);
    assert_eq!(session.bag(), &bag_before);
    assert_eq!(session.scoreboard(), scores_before);
    assert_eq!(session.active_index(), active);
    assert_eq!(session.board().tile_count(), 0);
    assert!(session.is_conserved());
}

#[test]
fn empty_commit_changes_nothing() {
    let mut session = seeded_session(3, "EN", 8);
    let before = session.snapshot();

    let report = session.commit_turn().unwrap();
    assert_eq!(report.outcome, TurnOutcome::NoTilesPlaced);
    assert!(!report.game_over);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn saved_game_resumes_identically() {
    let mut session = seeded_session(3, "FR", 9);
    session.pass_turn().unwrap();
    session.select_rack_tile(2).unwrap();
    session.propose_placement(CENTER).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    session.save(&path).unwrap();

    let mut first: GameSession = GameSession::load(&path, Some(42)).unwrap();
    let mut second: GameSession = GameSession::load(&path, Some(42)).unwrap();
    assert_eq!(first.snapshot(), session.snapshot());

    first.pass_turn().unwrap();
    second.pass_turn().unwrap();
    assert_eq!(first.snapshot(), second.snapshot());
    assert!(first.is_conserved());
}

#[test]
fn nobody_leads_a_scoreless_game() {
    let session = seeded_session(4, "EN", 10);

    assert!(!session.is_game_over());
    assert_eq!(session.winner().unwrap().name(), "Player 1");
    let scoreboard = session.scoreboard();
    assert_eq!(scoreboard.len(), 4);
    assert!(scoreboard.iter().all(|line| !line.is_leading && line.points == 0));
}
