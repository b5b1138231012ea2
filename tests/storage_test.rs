//! Integration tests for the draft ledger on disk

use draft_board::{
    board::{curated::curated_board, DEFAULT_BOARD_SIZE},
    storage::*,
    DraftError, Position, Season,
};
use tempfile::TempDir;

fn open(dir: &TempDir) -> DraftLedger {
    DraftLedger::new(&dir.path().join("nested").join("draft.db")).unwrap()
}

#[test]
fn test_ledger_persists_between_opens() {
    let dir = TempDir::new().unwrap();
    {
        let mut ledger = open(&dir);
        let board = curated_board(Season::new(2025), DEFAULT_BOARD_SIZE).unwrap();
        ledger.import_board(&board).unwrap();
        ledger
            .draft_player("Lamar Jackson", 38.0, Some("QB"), DEFAULT_TOTAL_BUDGET)
            .unwrap();
        ledger.add_target("Puka Nacua", 1).unwrap();
    }

    let ledger = open(&dir);
    assert_eq!(ledger.player_count().unwrap(), 170);

    let roster = ledger.roster().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player.name, "Lamar Jackson");
    assert_eq!(roster[0].player.position, Position::QB);

    let targets = ledger.targets().unwrap();
    assert_eq!(targets[0].player.name, "Puka Nacua");

    let summary = ledger
        .budget_summary(DEFAULT_TOTAL_BUDGET, DEFAULT_ROSTER_SLOTS)
        .unwrap();
    assert_eq!(summary.remaining, 162.0);
    assert_eq!(summary.empty_slots, 15);
    assert_eq!(summary.average_per_slot, 10.8);
}

#[test]
fn test_reimport_keeps_roster() {
    let dir = TempDir::new().unwrap();
    let mut ledger = open(&dir);
    let board = curated_board(Season::new(2025), DEFAULT_BOARD_SIZE).unwrap();

    ledger.import_board(&board).unwrap();
    ledger.draft_player("Ravens", 1.0, None, 200.0).unwrap();
    ledger.import_board(&board).unwrap();

    assert_eq!(ledger.player_count().unwrap(), 170);
    assert_eq!(ledger.roster().unwrap().len(), 1);
}

#[test]
fn test_ledger_errors_are_draft_errors() {
    let mut ledger = DraftLedger::new_in_memory().unwrap();
    let err = ledger.draft_player("Anyone", 1.0, None, 200.0).unwrap_err();

    let draft_err: DraftError = err.into();
    assert!(matches!(draft_err, DraftError::Storage(_)));
    assert!(draft_err.to_string().contains("Player not found: Anyone"));
}
