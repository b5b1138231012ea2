//! Auction budget arithmetic over the roster

use super::{models::BudgetSummary, schema::DraftLedger};
use anyhow::Result;

pub const DEFAULT_TOTAL_BUDGET: f64 = 200.0;
pub const DEFAULT_ROSTER_SLOTS: usize = 16;

/// Below this share of the total budget, remaining money is flagged as low.
const LOW_BUDGET_SHARE: f64 = 0.2;

impl DraftLedger {
    pub fn budget_summary(&self, total_budget: f64, roster_slots: usize) -> Result<BudgetSummary> {
        let spent = self.total_spent()?;
        let players_drafted = self.roster()?.len();
        Ok(BudgetSummary::compute(
            total_budget,
            roster_slots,
            spent,
            players_drafted,
        ))
    }
}

impl BudgetSummary {
    pub fn compute(
        total_budget: f64,
        roster_slots: usize,
        spent: f64,
        players_drafted: usize,
    ) -> Self {
        let remaining = total_budget - spent;
        let empty_slots = roster_slots.saturating_sub(players_drafted);
        let average_per_slot = if empty_slots > 0 {
            remaining / empty_slots as f64
        } else {
            0.0
        };
        let spent_percentage = if total_budget > 0.0 {
            spent / total_budget * 100.0
        } else {
            0.0
        };

        Self {
            total_budget,
            spent,
            remaining,
            players_drafted,
            roster_slots,
            empty_slots,
            average_per_slot,
            spent_percentage,
            is_low_budget: remaining < total_budget * LOW_BUDGET_SHARE,
        }
    }
}
