//! Data models for the draft ledger

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;

use crate::{projection::PriorityLabel, EspnId, Position, Rank, Tier};

/// A board player as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerPlayer {
    pub id: i64,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub rank: Rank,
    pub tier: Tier,
    pub position_rank: Option<u32>,
    pub auction_value: f64,
    pub espn_id: Option<EspnId>,
    pub projected_points: f64,
}

impl LedgerPlayer {
    pub fn priority(&self) -> PriorityLabel {
        PriorityLabel::for_rank(self.rank)
    }
}

/// A drafted player and what was paid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPick {
    pub player: LedgerPlayer,
    pub purchase_price: f64,
    pub roster_slot: Option<String>,
    pub drafted_at: u64,
}

/// A player on the target list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pub player: LedgerPlayer,
    pub priority: u32,
}

/// Outcome of applying a tier sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierUpdateReport {
    pub updated: usize,
    pub not_found: Vec<String>,
}

/// Auction budget state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub players_drafted: usize,
    pub roster_slots: usize,
    pub empty_slots: usize,
    /// Remaining budget spread over empty slots; 0 when the roster is full.
    pub average_per_slot: f64,
    pub spent_percentage: f64,
    /// Less than 20% of the budget left.
    pub is_low_budget: bool,
}

fn conversion_error(err: crate::DraftError) -> FromSqlError {
    FromSqlError::Other(Box::new(err))
}

impl ToSql for Position {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Position {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(conversion_error)
    }
}

impl ToSql for Rank {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_u32()))
    }
}

impl FromSql for Rank {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Rank::try_from(value.as_i64()?).map_err(conversion_error)
    }
}

impl ToSql for Tier {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_u8()))
    }
}

impl FromSql for Tier {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Tier::try_from(value.as_i64()?).map_err(conversion_error)
    }
}

impl ToSql for EspnId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_u64() as i64))
    }
}

impl FromSql for EspnId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_i64()?;
        u64::try_from(raw)
            .map(EspnId::new)
            .map_err(|_| FromSqlError::OutOfRange(raw))
    }
}
