//! Draft ledger commands

use tracing::warn;

use super::{load_board, CommandContext};
use crate::{
    board::import::load_tier_sheet,
    cli::DraftCmd,
    storage::{BudgetSummary, LedgerPlayer, RosterPick, Target},
    Result,
};

pub fn handle_draft(ctx: &CommandContext, cmd: &DraftCmd) -> Result<()> {
    let mut ledger = ctx.open_ledger()?;

    match cmd {
        DraftCmd::Import { source } => {
            let board = load_board(source, &ctx.id_cache())?;
            let count = ledger.import_board(&board)?;
            println!(
                "Imported {} players ({} in ledger)",
                count,
                ledger.player_count()?
            );
        }

        DraftCmd::Tiers { input } => {
            let updates = load_tier_sheet(input)?;
            let report = ledger.apply_tier_updates(&updates)?;
            println!("Updated: {}", report.updated);
            println!("Not found: {}", report.not_found.len());
            for name in &report.not_found {
                warn!("Tier sheet player not found: {}", name);
            }
        }

        DraftCmd::Pick { name, price, slot } => {
            let pick = ledger.draft_player(name, *price, slot.as_deref(), ctx.total_budget)?;
            println!(
                "Drafted {} ({} {}) for ${}",
                pick.player.name, pick.player.position, pick.player.team, pick.purchase_price
            );
            print_budget(&ledger.budget_summary(ctx.total_budget, ctx.roster_slots)?);
        }

        DraftCmd::Release { name } => {
            if ledger.undraft_player(name)? {
                println!("Released {}", name);
            } else {
                println!("{} was not drafted", name);
            }
        }

        DraftCmd::Available {
            position,
            limit,
            json,
        } => {
            let mut players = ledger.available_players(*position)?;
            if let Some(limit) = limit {
                players.truncate(*limit);
            }
            if *json {
                println!("{}", serde_json::to_string_pretty(&players)?);
            } else {
                print_players(&players);
            }
        }

        DraftCmd::Roster { json } => {
            let roster = ledger.roster()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                print_roster(&roster);
            }
        }

        DraftCmd::Budget { json } => {
            let summary = ledger.budget_summary(ctx.total_budget, ctx.roster_slots)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_budget(&summary);
            }
        }

        DraftCmd::Target { name, priority } => {
            let target = ledger.add_target(name, *priority)?;
            println!(
                "Targeting {} at priority {}",
                target.player.name, target.priority
            );
        }

        DraftCmd::Untarget { name } => {
            if ledger.remove_target(name)? {
                println!("Removed {} from targets", name);
            } else {
                println!("{} was not a target", name);
            }
        }

        DraftCmd::Targets { json } => {
            let targets = ledger.targets()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&targets)?);
            } else {
                print_targets(&targets);
            }
        }
    }

    Ok(())
}

fn print_players(players: &[LedgerPlayer]) {
    if players.is_empty() {
        println!("No players available");
        return;
    }
    println!(
        "{:<5} {:<28} {:<4} {:<4} {:<5} {:>7} {:>8}  Priority",
        "Rank", "Name", "Pos", "Team", "Tier", "Value", "Proj"
    );
    for p in players {
        println!(
            "{:<5} {:<28} {:<4} {:<4} {:<5} {:>7} {:>8.1}  {}",
            p.rank.to_string(),
            p.name,
            p.position.to_string(),
            p.team,
            p.tier.to_string(),
            format!("${}", p.auction_value),
            p.projected_points,
            p.priority()
        );
    }
}

fn print_roster(roster: &[RosterPick]) {
    if roster.is_empty() {
        println!("No players drafted");
        return;
    }
    for pick in roster {
        println!(
            "{:<6} {:<28} {:<4} ${}",
            pick.roster_slot.as_deref().unwrap_or("-"),
            pick.player.name,
            pick.player.position.to_string(),
            pick.purchase_price
        );
    }
}

fn print_targets(targets: &[Target]) {
    if targets.is_empty() {
        println!("No targets");
        return;
    }
    for t in targets {
        println!(
            "{:>3}. {:<28} {:<4} rank {:<4} ${}",
            t.priority,
            t.player.name,
            t.player.position.to_string(),
            t.player.rank.to_string(),
            t.player.auction_value
        );
    }
}

fn print_budget(summary: &BudgetSummary) {
    println!(
        "Spent ${:.0} of ${:.0} ({:.0}%), ${:.0} remaining{}",
        summary.spent,
        summary.total_budget,
        summary.spent_percentage,
        summary.remaining,
        if summary.is_low_budget { " (low)" } else { "" }
    );
    println!(
        "{} drafted, {} slots open, ${:.1} per slot",
        summary.players_drafted, summary.empty_slots, summary.average_per_slot
    );
}
