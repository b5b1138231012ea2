//! Draft board: an ordered list of curated players, each paired with its
//! projection.
//!
//! Rank is never supplied by the caller. It is the 1-based insertion order of
//! the players handed to [`DraftBoard::new`], so reordering the input is how
//! a list gets re-ranked.

use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::{
    core::csv::write_row,
    projection::{project, PriorityLabel, ProjectionResult},
    EspnId, Position, Rank, Result, Season, Tier,
};

pub mod curated;
pub mod import;


/// Default cap on the number of players a board holds.
pub const DEFAULT_BOARD_SIZE: usize = 200;

/// A player as curated by hand, before a rank is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CuratedPlayer {
    pub name: String,
    pub position: Position,
    pub team: String,
    pub tier: Tier,
    pub auction_value: f64,
    pub espn_id: Option<EspnId>,
}

impl CuratedPlayer {
    pub fn new(name: &str, position: Position, team: &str, tier: Tier, auction_value: f64) -> Self {
        Self {
            name: name.to_string(),
            position,
            team: team.to_string(),
            tier,
            auction_value,
            espn_id: None,
        }
    }

    pub fn with_espn_id(mut self, id: Option<EspnId>) -> Self {
        self.espn_id = id;
        self
    }
}

/// One ranked player on a board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRankingEntry {
    pub name: String,
    pub position: Position,
    pub team: String,
    pub rank: Rank,
    pub tier: Tier,
    pub auction_value: f64,
    pub espn_id: Option<EspnId>,
}

impl PlayerRankingEntry {
    pub fn projection(&self) -> ProjectionResult {
        project(self.rank, self.position, self.tier)
    }
}

/// A board entry joined with its projection, ready for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    pub rank: Rank,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub tier: Tier,
    pub auction_value: f64,
    pub espn_id: Option<EspnId>,
    pub projected_points: f64,
    pub priority: PriorityLabel,
    pub notes: &'static str,
}

impl BoardRow {
    fn from_entry(entry: &PlayerRankingEntry) -> Self {
        let projection = entry.projection();
        Self {
            rank: entry.rank,
            name: entry.name.clone(),
            position: entry.position,
            team: entry.team.clone(),
            tier: entry.tier,
            auction_value: entry.auction_value,
            espn_id: entry.espn_id,
            projected_points: projection.projected_points,
            priority: projection.priority_label,
            notes: if entry.espn_id.is_some() {
                "ESPN ID available"
            } else {
                "Need ESPN ID for live stats"
            },
        }
    }

    /// Cells in the same order as [`csv_header`].
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.name.clone(),
            self.position.to_string(),
            self.team.clone(),
            self.tier.to_string(),
            self.auction_value.to_string(),
            self.espn_id.map(|id| id.to_string()).unwrap_or_default(),
            format!("{:.1}", self.projected_points),
            self.notes.to_string(),
            self.priority.to_string(),
        ]
    }
}

/// Header for board CSVs; the projection column is labelled with the season.
pub fn csv_header(season: Season) -> Vec<String> {
    [
        "rank",
        "name",
        "position",
        "team",
        "tier",
        "auction_value_ppr",
        "espn_id",
    ]
    .iter()
    .map(|s| s.to_string())
    .chain([
        format!("projected_fpts_{}", season),
        "notes".to_string(),
        "priority".to_string(),
    ])
    .collect()
}

/// Per-position head count for a board summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionCounts {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub k_def: usize,
    pub with_espn_id: usize,
}

impl PositionCounts {
    pub fn total(&self) -> usize {
        self.qb + self.rb + self.wr + self.te + self.k_def
    }
}

/// Ordered, ranked list of players for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBoard {
    season: Season,
    entries: Vec<PlayerRankingEntry>,
}

impl DraftBoard {
    /// Rank `players` by insertion order, keeping at most `limit` of them.
    pub fn new(season: Season, players: Vec<CuratedPlayer>, limit: usize) -> Result<Self> {
        if players.len() > limit {
            warn!(
                "Board holds {} players; dropping {} beyond the cap",
                limit,
                players.len() - limit
            );
        }

        let entries = players
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(idx, p)| {
                let rank = Rank::new(idx as u32 + 1)?;
                Ok(PlayerRankingEntry {
                    name: p.name,
                    position: p.position,
                    team: p.team,
                    rank,
                    tier: p.tier,
                    auction_value: p.auction_value,
                    espn_id: p.espn_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Built board for {} with {} players", season, entries.len());
        Ok(Self { season, entries })
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn entries(&self) -> &[PlayerRankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill in ESPN ids for entries that don't have one yet.
    ///
    /// Returns how many entries gained an id.
    pub fn merge_ids<F>(&mut self, lookup: F) -> usize
    where
        F: Fn(&str) -> Option<EspnId>,
    {
        let mut merged = 0;
        for entry in self.entries.iter_mut().filter(|e| e.espn_id.is_none()) {
            if let Some(id) = lookup(&entry.name) {
                entry.espn_id = Some(id);
                merged += 1;
            }
        }
        merged
    }

    pub fn rows(&self) -> Vec<BoardRow> {
        self.entries.iter().map(BoardRow::from_entry).collect()
    }

    pub fn position_counts(&self) -> PositionCounts {
        let mut counts = PositionCounts::default();
        for entry in &self.entries {
            match entry.position {
                Position::QB => counts.qb += 1,
                Position::RB => counts.rb += 1,
                Position::WR => counts.wr += 1,
                Position::TE => counts.te += 1,
                Position::K | Position::DEF => counts.k_def += 1,
            }
            if entry.espn_id.is_some() {
                counts.with_espn_id += 1;
            }
        }
        counts
    }

    /// Write the board as CSV, header first.
    pub fn write_csv<W: Write>(&self, mut w: W) -> io::Result<()> {
        write_row(&mut w, &csv_header(self.season))?;
        for row in self.rows() {
            write_row(&mut w, &row.to_record())?;
        }
        Ok(())
    }
}
