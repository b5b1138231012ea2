//! Last-season stats command
//!
//! Requests go out one at a time with a fixed pause between them. A failed
//! lookup is logged and written as a zero row; it never stops the batch.

use serde::Serialize;
use std::{
    io::{self, Write},
    path::Path,
    time::Duration,
};
use tracing::{info, warn};

use super::{load_board, write_output, CommandContext};
use crate::{
    board::PlayerRankingEntry,
    cli::BoardSource,
    core::csv::write_row,
    espn::{stats::fetch_season_stats, EspnClient, SeasonStats},
    Result, Season,
};

pub const DEFAULT_STATS_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Ok,
    Error,
    NoId,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Ok => "ok",
            LookupStatus::Error => "error",
            LookupStatus::NoId => "no_id",
        }
    }
}

/// One board player with the stats ESPN returned for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub entry: PlayerRankingEntry,
    pub stats: SeasonStats,
    pub status: LookupStatus,
    pub notes: String,
}

impl StatsRow {
    fn to_record(&self) -> Vec<String> {
        let s = &self.stats;
        vec![
            self.entry.rank.to_string(),
            self.entry.name.clone(),
            self.entry.position.to_string(),
            self.entry.team.clone(),
            self.entry.tier.to_string(),
            self.entry.espn_id.map(|id| id.to_string()).unwrap_or_default(),
            s.receptions.to_string(),
            s.receiving_yards.to_string(),
            s.receiving_tds.to_string(),
            s.rushing_yards.to_string(),
            s.rushing_tds.to_string(),
            s.passing_yards.to_string(),
            s.passing_tds.to_string(),
            format!("{:.1}", s.fantasy_points()),
            self.status.as_str().to_string(),
            self.notes.clone(),
        ]
    }
}

/// Stat columns are suffixed with the season they cover.
pub fn stats_header(season: Season) -> Vec<String> {
    let mut header: Vec<String> = ["rank", "name", "position", "team", "tier", "espn_id"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend(
        [
            "receptions",
            "receiving_yards",
            "receiving_tds",
            "rushing_yards",
            "rushing_tds",
            "passing_yards",
            "passing_tds",
            "fantasy_points",
        ]
        .iter()
        .map(|s| format!("{s}_{season}")),
    );
    header.push("status".to_string());
    header.push("notes".to_string());
    header
}

pub fn write_stats_csv<W: Write>(mut w: W, season: Season, rows: &[StatsRow]) -> io::Result<()> {
    write_row(&mut w, &stats_header(season))?;
    for row in rows {
        write_row(&mut w, &row.to_record())?;
    }
    Ok(())
}

/// Look up stats for every entry, sequentially.
pub async fn collect_stats(
    client: &EspnClient,
    entries: &[PlayerRankingEntry],
    season: Season,
    delay: Duration,
) -> Vec<StatsRow> {
    let mut rows = Vec::with_capacity(entries.len());
    let mut first_request = true;

    for entry in entries {
        let Some(id) = entry.espn_id else {
            rows.push(StatsRow {
                entry: entry.clone(),
                stats: SeasonStats::default(),
                status: LookupStatus::NoId,
                notes: "Need ESPN ID for live stats".to_string(),
            });
            continue;
        };

        if !first_request && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        first_request = false;

        let row = match fetch_season_stats(client, id, season).await {
            Ok(stats) => StatsRow {
                entry: entry.clone(),
                stats,
                status: LookupStatus::Ok,
                notes: String::new(),
            },
            Err(e) => {
                warn!("Stats lookup failed for {} ({}): {}", entry.name, id, e);
                StatsRow {
                    entry: entry.clone(),
                    stats: SeasonStats::default(),
                    status: LookupStatus::Error,
                    notes: e.to_string(),
                }
            }
        };
        rows.push(row);
    }

    rows
}

pub async fn handle_stats(
    ctx: &CommandContext,
    source: &BoardSource,
    output: Option<&Path>,
    stats_season: Option<Season>,
) -> Result<()> {
    let board = load_board(source, &ctx.id_cache())?;
    let season = stats_season.unwrap_or_else(|| board.season().previous());
    let client = ctx.espn_client()?;

    info!(
        "Fetching {} stats for {} players with ESPN ids",
        season,
        board.position_counts().with_espn_id
    );
    let rows = collect_stats(
        &client,
        board.entries(),
        season,
        ctx.delay_or(DEFAULT_STATS_DELAY),
    )
    .await;

    write_output(output, |out| write_stats_csv(out, season, &rows))?;

    if let Some(path) = output {
        let ok = rows.iter().filter(|r| r.status == LookupStatus::Ok).count();
        let failed = rows.iter().filter(|r| r.status == LookupStatus::Error).count();
        println!(
            "Wrote {} rows to {} ({} with stats, {} failed)",
            rows.len(),
            path.display(),
            ok,
            failed
        );
    }
    Ok(())
}
