//! ESPN id discovery command

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use super::{write_output, CommandContext};
use crate::{
    board::curated::known_espn_id,
    core::{csv::write_row, IdCache},
    espn::discovery::{default_ranges, IdFinder, IdRange, DEFAULT_PROBE_DELAY, PRIORITY_PLAYERS},
    EspnId, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStatus {
    Known,
    Cached,
    Found,
    NotFound,
}

impl IdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStatus::Known => "known",
            IdStatus::Cached => "cached",
            IdStatus::Found => "found",
            IdStatus::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdResult {
    pub name: String,
    pub id: Option<EspnId>,
    pub status: IdStatus,
}

/// Resolve each name: known table first, then the cache (unless `refresh`),
/// then a range scan. Ids found by scanning are added to `cache`.
pub async fn resolve_ids(
    finder: &mut IdFinder<'_>,
    names: &[String],
    ranges: &[IdRange],
    cache: &mut IdCache,
    refresh: bool,
) -> Vec<IdResult> {
    let mut results = Vec::with_capacity(names.len());

    for name in names {
        let (id, status) = if let Some(id) = known_espn_id(name) {
            (Some(id), IdStatus::Known)
        } else if let Some(id) = cache.get(name).filter(|_| !refresh) {
            (Some(id), IdStatus::Cached)
        } else {
            info!("Scanning for {}", name);
            match finder.find(name, ranges).await {
                Some(id) => {
                    cache.insert(name, id);
                    (Some(id), IdStatus::Found)
                }
                None => (None, IdStatus::NotFound),
            }
        };

        results.push(IdResult {
            name: name.clone(),
            id,
            status,
        });
    }

    results
}

pub fn write_results_csv<W: Write>(mut w: W, results: &[IdResult]) -> io::Result<()> {
    write_row(&mut w, &["Player Name", "ESPN ID", "Status"])?;
    for r in results {
        let id = r.id.map(|id| id.to_string()).unwrap_or_default();
        write_row(&mut w, &[r.name.as_str(), id.as_str(), r.status.as_str()])?;
    }
    Ok(())
}

pub fn write_discovered_csv<W: Write>(mut w: W, players: &[(EspnId, String)]) -> io::Result<()> {
    write_row(&mut w, &["ESPN ID", "Player Name"])?;
    for (id, name) in players {
        write_row(&mut w, &[id.to_string(), name.clone()])?;
    }
    Ok(())
}

/// `ids.csv` -> `ids-discovered.csv`, next to the results file.
pub fn discovered_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "espn-ids".to_string());
    output.with_file_name(format!("{stem}-discovered.csv"))
}

pub async fn handle_find_ids(
    ctx: &CommandContext,
    names: &[String],
    output: Option<&Path>,
    refresh: bool,
) -> Result<()> {
    let names: Vec<String> = if names.is_empty() {
        PRIORITY_PLAYERS.iter().map(|s| s.to_string()).collect()
    } else {
        names.to_vec()
    };

    let client = ctx.espn_client()?;
    let mut finder = IdFinder::new(&client, ctx.delay_or(DEFAULT_PROBE_DELAY));
    let mut cache = ctx.id_cache();

    let results = resolve_ids(&mut finder, &names, &default_ranges(), &mut cache, refresh).await;

    if let Err(e) = cache.save(&ctx.id_cache_path) {
        warn!("Could not save id cache: {}", e);
    }

    write_output(output, |out| write_results_csv(out, &results))?;

    let discovered = finder.discovered();
    if let Some(path) = output {
        let found = results.iter().filter(|r| r.id.is_some()).count();
        println!("Resolved {}/{} players -> {}", found, results.len(), path.display());

        if !discovered.is_empty() {
            let extra = discovered_path(path);
            write_output(Some(extra.as_path()), |out| write_discovered_csv(out, &discovered))?;
            println!("Saw {} other athletes -> {}", discovered.len(), extra.display());
        }
    }
    Ok(())
}
