//! Reading player lists and tier sheets from CSV.

use std::path::Path;

use tracing::debug;

use super::CuratedPlayer;
use crate::{
    core::csv::{cell, parse_rows, Table},
    DraftError, EspnId, Position, Result, Tier,
};

/// Parse a rankings CSV into curated players, in file order.
///
/// Required columns: `name`, `position` (or `pos`), `tier`.
/// Optional: `team`, `auction_value` (or `auction`, `auction_value_ppr`),
/// `espn_id`. A board CSV written by this tool reads back unchanged.
pub fn parse_rankings(text: &str) -> Result<Vec<CuratedPlayer>> {
    let table = Table::parse(text).ok_or_else(|| DraftError::Csv {
        line: 1,
        message: "empty rankings file".to_string(),
    })?;

    let required = |names: &[&str]| {
        names
            .iter()
            .find_map(|n| table.column(n))
            .ok_or_else(|| DraftError::Csv {
                line: 1,
                message: format!("missing column '{}'", names[0]),
            })
    };
    let optional = |names: &[&str]| names.iter().find_map(|n| table.column(n));

    let name_col = required(&["name"])?;
    let position_col = required(&["position", "pos"])?;
    let tier_col = required(&["tier"])?;
    let team_col = optional(&["team"]);
    let auction_col = optional(&["auction_value", "auction", "auction_value_ppr"]);
    let id_col = optional(&["espn_id"]);

    let mut players = Vec::with_capacity(table.rows().len());
    for (line, row) in table.rows() {
        let line = *line;
        let at_line = |err: DraftError| DraftError::Csv {
            line,
            message: err.to_string(),
        };

        let name = cell(row, name_col);
        if name.is_empty() {
            return Err(DraftError::Csv {
                line,
                message: "missing player name".to_string(),
            });
        }

        let position: Position = cell(row, position_col).parse().map_err(at_line)?;
        let tier: Tier = cell(row, tier_col).parse().map_err(at_line)?;
        let team = team_col.map(|c| cell(row, c)).unwrap_or("");

        let auction_value = match auction_col.map(|c| cell(row, c)) {
            None | Some("") => 0.0,
            Some(raw) => parse_auction_value(raw).ok_or_else(|| DraftError::Csv {
                line,
                message: format!("invalid auction value '{}'", raw),
            })?,
        };

        let espn_id = match id_col.map(|c| cell(row, c)) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<EspnId>().map_err(at_line)?),
        };

        players.push(
            CuratedPlayer::new(name, position, team, tier, auction_value).with_espn_id(espn_id),
        );
    }

    debug!("Parsed {} ranked players", players.len());
    Ok(players)
}

/// Accepts `42`, `42.5` and `$42`; rejects negatives.
fn parse_auction_value(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim_start_matches('$').parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

pub fn load_rankings(path: &Path) -> Result<Vec<CuratedPlayer>> {
    let text = std::fs::read_to_string(path)?;
    parse_rankings(&text)
}

/// One row of a third-party tier sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TierUpdate {
    pub name: String,
    pub tier: Tier,
    /// Rank within the player's position, e.g. 12 for "WR12".
    pub position_rank: Option<u32>,
}

/// Parse a tier sheet: `tier,name,position_rank` with a header row.
///
/// Rows with fewer than three fields are skipped. The position rank keeps only
/// its digits, so "WR12" and "12" both read as 12.
pub fn parse_tier_sheet(text: &str) -> Result<Vec<TierUpdate>> {
    let mut updates = Vec::new();

    for (line, row) in parse_rows(text).into_iter().skip(1) {
        if row.len() < 3 {
            continue;
        }
        let name = cell(&row, 1);
        if name.is_empty() {
            continue;
        }
        let tier: Tier = cell(&row, 0).parse().map_err(|err: DraftError| DraftError::Csv {
            line,
            message: err.to_string(),
        })?;

        updates.push(TierUpdate {
            name: name.to_string(),
            tier,
            position_rank: position_rank_digits(cell(&row, 2)),
        });
    }

    Ok(updates)
}

pub fn load_tier_sheet(path: &Path) -> Result<Vec<TierUpdate>> {
    let text = std::fs::read_to_string(path)?;
    parse_tier_sheet(&text)
}

fn position_rank_digits(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
