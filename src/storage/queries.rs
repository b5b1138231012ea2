//! Ledger operations: board import, tier updates, picks and targets

use super::{models::*, schema::DraftLedger};
use crate::{
    board::{import::TierUpdate, DraftBoard},
    projection::project,
    DraftError, Position,
};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::{
    collections::HashSet,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::{debug, info};

const PLAYER_COLUMNS: &str = "p.id, p.name, p.position, p.team, p.rank, p.tier, \
     p.position_rank, p.auction_value, p.espn_id, p.projected_points";

/// Players are matched case-insensitively on their trimmed name.
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

impl DraftLedger {
    /// Insert or update every board entry, matched by name.
    ///
    /// An existing ESPN id is kept when the incoming entry has none. Undrafted
    /// players missing from the new board are removed along with any target
    /// on them; drafted players stay so the roster survives a re-import.
    pub fn import_board(&mut self, board: &DraftBoard) -> Result<usize> {
        let now = now_secs()?;
        let incoming: HashSet<String> = board
            .entries()
            .iter()
            .map(|e| name_key(&e.name))
            .collect();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO players
                 (name, name_key, position, team, rank, tier, auction_value,
                  espn_id, projected_points, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                 ON CONFLICT(name_key) DO UPDATE SET
                    name = excluded.name,
                    position = excluded.position,
                    team = excluded.team,
                    rank = excluded.rank,
                    tier = excluded.tier,
                    auction_value = excluded.auction_value,
                    espn_id = COALESCE(excluded.espn_id, players.espn_id),
                    projected_points = excluded.projected_points,
                    updated_at = excluded.updated_at",
            )?;

            for entry in board.entries() {
                stmt.execute(params![
                    entry.name,
                    name_key(&entry.name),
                    entry.position,
                    entry.team,
                    entry.rank,
                    entry.tier,
                    entry.auction_value,
                    entry.espn_id,
                    entry.projection().projected_points,
                    now
                ])?;
            }

            let mut stale_stmt = tx.prepare(
                "SELECT id, name_key FROM players
                 WHERE id NOT IN (SELECT player_id FROM roster)",
            )?;
            let stale = stale_stmt
                .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
                .collect::<rusqlite::Result<Vec<_>>>()?
                .into_iter()
                .filter(|(_, key)| !incoming.contains(key))
                .map(|(id, _)| id)
                .collect::<Vec<_>>();

            for id in &stale {
                tx.execute("DELETE FROM targets WHERE player_id = ?", [id])?;
                tx.execute("DELETE FROM players WHERE id = ?", [id])?;
            }
            if !stale.is_empty() {
                debug!("Removed {} players no longer on the board", stale.len());
            }
        }
        tx.commit()?;

        info!("Imported {} players into the ledger", board.len());
        Ok(board.len())
    }

    /// Apply tier-sheet rows. Tier changes re-run the projection.
    pub fn apply_tier_updates(&mut self, updates: &[TierUpdate]) -> Result<TierUpdateReport> {
        let now = now_secs()?;
        let mut report = TierUpdateReport::default();

        for update in updates {
            let Some(player) = self.find_player(&update.name)? else {
                debug!("Tier sheet player not in ledger: {}", update.name);
                report.not_found.push(update.name.clone());
                continue;
            };

            let projected = project(player.rank, player.position, update.tier).projected_points;
            self.conn.execute(
                "UPDATE players
                 SET tier = ?, position_rank = ?, projected_points = ?, updated_at = ?
                 WHERE id = ?",
                params![update.tier, update.position_rank, projected, now, player.id],
            )?;
            report.updated += 1;
        }

        Ok(report)
    }

    pub fn find_player(&self, name: &str) -> Result<Option<LedgerPlayer>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players p WHERE p.name_key = ?");
        let player = self
            .conn
            .query_row(&sql, [name_key(name)], |row| row_to_player(row, 0))
            .optional()?;
        Ok(player)
    }

    fn require_player(&self, name: &str) -> Result<LedgerPlayer> {
        self.find_player(name)?.ok_or_else(|| {
            DraftError::PlayerNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn player_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_drafted(&self, player_id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM roster WHERE player_id = ?",
            [player_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Record a pick.
    ///
    /// Fails when the player is unknown or already drafted, or when `price`
    /// is negative or more than what is left of `total_budget`.
    pub fn draft_player(
        &mut self,
        name: &str,
        price: f64,
        roster_slot: Option<&str>,
        total_budget: f64,
    ) -> Result<RosterPick> {
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice { price }.into());
        }

        let player = self.require_player(name)?;
        if self.is_drafted(player.id)? {
            return Err(DraftError::AlreadyDrafted { name: player.name }.into());
        }

        let remaining = total_budget - self.total_spent()?;
        if price > remaining {
            return Err(DraftError::Budget {
                message: format!("${price} for {} but only ${remaining} left", player.name),
            }
            .into());
        }

        let drafted_at = now_secs()?;
        self.conn.execute(
            "INSERT INTO roster (player_id, purchase_price, roster_slot, drafted_at)
             VALUES (?, ?, ?, ?)",
            params![player.id, price, roster_slot, drafted_at],
        )?;

        info!("Drafted {} for ${}", player.name, price);
        Ok(RosterPick {
            player,
            purchase_price: price,
            roster_slot: roster_slot.map(str::to_string),
            drafted_at,
        })
    }

    /// Undo a pick. Returns false when the player wasn't drafted.
    pub fn undraft_player(&mut self, name: &str) -> Result<bool> {
        let player = self.require_player(name)?;
        let removed = self
            .conn
            .execute("DELETE FROM roster WHERE player_id = ?", [player.id])?;
        Ok(removed > 0)
    }

    /// Drafted players in pick order.
    pub fn roster(&self) -> Result<Vec<RosterPick>> {
        let sql = format!(
            "SELECT {PLAYER_COLUMNS}, r.purchase_price, r.roster_slot, r.drafted_at
             FROM roster r JOIN players p ON p.id = r.player_id
             ORDER BY r.id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(RosterPick {
                player: row_to_player(row, 0)?,
                purchase_price: row.get(10)?,
                roster_slot: row.get(11)?,
                drafted_at: row.get(12)?,
            })
        })?;

        let mut picks = Vec::new();
        for row in rows {
            picks.push(row?);
        }
        Ok(picks)
    }

    pub fn total_spent(&self) -> Result<f64> {
        let spent: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(purchase_price), 0.0) FROM roster",
            [],
            |row| row.get(0),
        )?;
        Ok(spent)
    }

    /// Undrafted players in rank order, optionally for one position.
    pub fn available_players(&self, position: Option<Position>) -> Result<Vec<LedgerPlayer>> {
        let sql = format!(
            "SELECT {PLAYER_COLUMNS} FROM players p
             WHERE p.id NOT IN (SELECT player_id FROM roster)
               AND (?1 IS NULL OR p.position = ?1)
             ORDER BY p.rank, p.name"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([position], |row| row_to_player(row, 0))?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Add a target, or change its priority if already targeted.
    pub fn add_target(&mut self, name: &str, priority: u32) -> Result<Target> {
        if priority == 0 {
            return Err(DraftError::InvalidPriority { priority }.into());
        }
        let player = self.require_player(name)?;

        self.conn.execute(
            "INSERT INTO targets (player_id, priority, created_at) VALUES (?, ?, ?)
             ON CONFLICT(player_id) DO UPDATE SET priority = excluded.priority",
            params![player.id, priority, now_secs()?],
        )?;

        Ok(Target { player, priority })
    }

    /// Returns false when the player wasn't targeted.
    pub fn remove_target(&mut self, name: &str) -> Result<bool> {
        let player = self.require_player(name)?;
        let removed = self
            .conn
            .execute("DELETE FROM targets WHERE player_id = ?", [player.id])?;
        Ok(removed > 0)
    }

    /// Undrafted targets, by priority then rank.
    pub fn targets(&self) -> Result<Vec<Target>> {
        let sql = format!(
            "SELECT {PLAYER_COLUMNS}, t.priority
             FROM targets t JOIN players p ON p.id = t.player_id
             WHERE p.id NOT IN (SELECT player_id FROM roster)
             ORDER BY t.priority, p.rank"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(Target {
                player: row_to_player(row, 0)?,
                priority: row.get(10)?,
            })
        })?;

        let mut targets = Vec::new();
        for row in rows {
            targets.push(row?);
        }
        Ok(targets)
    }
}

/// Read the `PLAYER_COLUMNS` block starting at column `offset`.
fn row_to_player(row: &Row, offset: usize) -> rusqlite::Result<LedgerPlayer> {
    Ok(LedgerPlayer {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        position: row.get(offset + 2)?,
        team: row.get(offset + 3)?,
        rank: row.get(offset + 4)?,
        tier: row.get(offset + 5)?,
        position_rank: row.get(offset + 6)?,
        auction_value: row.get(offset + 7)?,
        espn_id: row.get(offset + 8)?,
        projected_points: row.get(offset + 9)?,
    })
}
