//! Integration tests for CLI parsing and command handlers

use clap::Parser;
use draft_board::{
    cli::{BoardSource, Commands, DraftBoardCli, DraftCmd},
    commands::{
        board::handle_board, draft::handle_draft, find_ids::handle_find_ids, CommandContext,
    },
    Position, Season,
};
use std::{path::PathBuf, time::Duration};
use tempfile::TempDir;

fn context(dir: &TempDir) -> CommandContext {
    CommandContext {
        db_path: dir.path().join("draft.db"),
        id_cache_path: dir.path().join("ids.json"),
        total_budget: 200.0,
        roster_slots: 16,
        // Nothing listens here; commands under test must not need the network.
        espn_base_url: "http://127.0.0.1:9".to_string(),
        delay: Some(Duration::ZERO),
    }
}

fn builtin_source() -> BoardSource {
    BoardSource {
        input: None,
        season: Season::new(2025),
        limit: 200,
    }
}

#[cfg(test)]
mod cli_parsing_tests {
    use super::*;

    #[test]
    fn test_parse_project() {
        let cli = DraftBoardCli::try_parse_from([
            "draft-board", "project", "--rank", "50", "--position", "wr", "--tier", "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Project {
                rank,
                position,
                tier,
                json,
            } => {
                assert_eq!(rank.as_u32(), 50);
                assert_eq!(position, Position::WR);
                assert_eq!(tier.as_u8(), 2);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.global.log, "info");
        assert_eq!(cli.global.budget, 200.0);
    }

    #[test]
    fn test_parse_project_rejects_bad_tier() {
        let result = DraftBoardCli::try_parse_from([
            "draft-board", "project", "--rank", "1", "--position", "QB", "--tier", "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_project_rejects_unknown_position() {
        let result = DraftBoardCli::try_parse_from([
            "draft-board", "project", "--rank", "1", "--position", "LB", "--tier", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_board_defaults() {
        let cli = DraftBoardCli::try_parse_from(["draft-board", "board"]).unwrap();
        match cli.command {
            Commands::Board {
                source,
                output,
                json,
            } => {
                assert!(source.input.is_none());
                assert_eq!(source.season, Season::default());
                assert_eq!(source.limit, 200);
                assert!(output.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_draft_pick_with_global_options() {
        let cli = DraftBoardCli::try_parse_from([
            "draft-board",
            "draft",
            "pick",
            "Bijan Robinson",
            "--price",
            "61",
            "--slot",
            "RB1",
            "--budget",
            "250",
            "--db",
            "/tmp/test.db",
        ])
        .unwrap();

        assert_eq!(cli.global.budget, 250.0);
        assert_eq!(cli.global.db, Some(PathBuf::from("/tmp/test.db")));
        match cli.command {
            Commands::Draft {
                cmd: DraftCmd::Pick { name, price, slot },
            } => {
                assert_eq!(name, "Bijan Robinson");
                assert_eq!(price, 61.0);
                assert_eq!(slot.as_deref(), Some("RB1"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_find_ids_names() {
        let cli = DraftBoardCli::try_parse_from([
            "draft-board", "find-ids", "-n", "Puka Nacua", "-n", "Joe Burrow", "--refresh",
        ])
        .unwrap();
        match cli.command {
            Commands::FindIds { names, refresh, .. } => {
                assert_eq!(names, vec!["Puka Nacua", "Joe Burrow"]);
                assert!(refresh);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

#[test]
fn test_board_command_writes_csv() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let output = dir.path().join("board.csv");

    handle_board(&ctx, &builtin_source(), Some(output.as_path()), false).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 171);
    assert_eq!(
        lines[0],
        "rank,name,position,team,tier,auction_value_ppr,espn_id,projected_fpts_2025,notes,priority"
    );
    assert!(lines[1].starts_with("1,"));
}

#[test]
fn test_board_command_writes_json() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let output = dir.path().join("board.json");
    let source = BoardSource {
        limit: 5,
        ..builtin_source()
    };

    handle_board(&ctx, &source, Some(output.as_path()), true).unwrap();

    let rows: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 5);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["priority"], "Must Draft");
}

#[test]
fn test_draft_flow() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    handle_draft(
        &ctx,
        &DraftCmd::Import {
            source: builtin_source(),
        },
    )
    .unwrap();
    handle_draft(
        &ctx,
        &DraftCmd::Pick {
            name: "josh allen".to_string(),
            price: 42.0,
            slot: Some("QB".to_string()),
        },
    )
    .unwrap();

    // Picking the same player again fails.
    let again = handle_draft(
        &ctx,
        &DraftCmd::Pick {
            name: "Josh Allen".to_string(),
            price: 1.0,
            slot: None,
        },
    );
    assert!(again.is_err());

    let ledger = ctx.open_ledger().unwrap();
    let summary = ledger.budget_summary(200.0, 16).unwrap();
    assert_eq!(summary.spent, 42.0);
    assert_eq!(summary.players_drafted, 1);
    assert!(ledger
        .available_players(Some(Position::QB))
        .unwrap()
        .iter()
        .all(|p| p.name != "Josh Allen"));
}

#[test]
fn test_draft_tier_sheet() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let sheet = dir.path().join("tiers.csv");
    std::fs::write(&sheet, "Tier,Player,Rank\n2,Josh Allen,QB2\n1,Not A Player,WR1\n").unwrap();

    handle_draft(
        &ctx,
        &DraftCmd::Import {
            source: builtin_source(),
        },
    )
    .unwrap();
    handle_draft(&ctx, &DraftCmd::Tiers { input: sheet }).unwrap();

    let allen = ctx
        .open_ledger()
        .unwrap()
        .find_player("Josh Allen")
        .unwrap()
        .unwrap();
    assert_eq!(allen.tier.as_u8(), 2);
    assert_eq!(allen.position_rank, Some(2));
}

#[tokio::test]
async fn test_find_ids_known_players_need_no_network() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let output = dir.path().join("ids.csv");

    handle_find_ids(
        &ctx,
        &["Josh Allen".to_string(), "Davante Adams".to_string()],
        Some(output.as_path()),
        false,
    )
    .await
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Player Name,ESPN ID,Status\nJosh Allen,3128390,known\nDavante Adams,16800,known\n"
    );
    assert!(!dir.path().join("ids-discovered.csv").exists());
}
