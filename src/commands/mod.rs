//! Command implementations for the draft board CLI

pub mod board;
pub mod draft;
pub mod find_ids;
pub mod project;
pub mod stats;


use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};

use crate::{
    board::{curated, import, DraftBoard},
    cli::{BoardSource, GlobalOpts},
    core::{database_path, id_cache_path, IdCache},
    espn::EspnClient,
    storage::DraftLedger,
    Result,
};

/// Resources and settings shared by the command handlers.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub db_path: PathBuf,
    pub id_cache_path: PathBuf,
    pub total_budget: f64,
    pub roster_slots: usize,
    pub espn_base_url: String,
    pub delay: Option<Duration>,
}

impl CommandContext {
    pub fn from_options(opts: &GlobalOpts) -> Self {
        Self {
            db_path: opts.db.clone().unwrap_or_else(database_path),
            id_cache_path: id_cache_path(),
            total_budget: opts.budget,
            roster_slots: opts.roster_slots,
            espn_base_url: opts.espn_base_url.clone(),
            delay: opts.delay_ms.map(Duration::from_millis),
        }
    }

    pub fn open_ledger(&self) -> Result<DraftLedger> {
        Ok(DraftLedger::new(&self.db_path)?)
    }

    pub fn espn_client(&self) -> Result<EspnClient> {
        EspnClient::with_base_url(&self.espn_base_url)
    }

    /// The configured request delay, or `default` when none was given.
    pub fn delay_or(&self, default: Duration) -> Duration {
        self.delay.unwrap_or(default)
    }

    pub fn id_cache(&self) -> IdCache {
        IdCache::load(&self.id_cache_path)
    }
}

/// Build a board from a rankings CSV, or the built-in list when none is given.
///
/// Ids missing from the source are filled in from the known-id table and then
/// from ids found by earlier `find-ids` runs.
pub fn load_board(source: &BoardSource, id_cache: &IdCache) -> Result<DraftBoard> {
    let mut board = match &source.input {
        Some(path) => {
            info!("Reading rankings from {}", path.display());
            let players = import::load_rankings(path)?;
            DraftBoard::new(source.season, players, source.limit)?
        }
        None => curated::curated_board(source.season, source.limit)?,
    };

    let merged = board.merge_ids(|name| curated::known_espn_id(name).or_else(|| id_cache.get(name)));
    debug!("Merged {} ESPN ids into the board", merged);
    Ok(board)
}

/// Run `write` against `path`, or stdout when there is no path.
pub fn write_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut out = BufWriter::new(File::create(path)?);
            write(&mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
