//! CLI argument definitions and parsing structures.

use super::types::{Position, Rank, Season, Tier};
use crate::{
    board::DEFAULT_BOARD_SIZE,
    espn::ESPN_WEB_BASE_URL,
    storage::{DEFAULT_ROSTER_SLOTS, DEFAULT_TOTAL_BUDGET},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalOpts {
    /// Log filter, e.g. `debug` or `draft_board=trace` (`RUST_LOG` also applies).
    #[clap(long, global = true, default_value = "info")]
    pub log: String,

    /// Draft ledger database (default: the user cache dir).
    #[clap(long, global = true, env = "DRAFT_BOARD_DB")]
    pub db: Option<PathBuf>,

    /// Total auction budget.
    #[clap(long, global = true, env = "DRAFT_BOARD_BUDGET", default_value_t = DEFAULT_TOTAL_BUDGET)]
    pub budget: f64,

    /// Roster slots to fill.
    #[clap(long, global = true, default_value_t = DEFAULT_ROSTER_SLOTS)]
    pub roster_slots: usize,

    /// ESPN host serving the athlete endpoints.
    #[clap(long, global = true, env = "DRAFT_BOARD_ESPN_URL", default_value = ESPN_WEB_BASE_URL)]
    pub espn_base_url: String,

    /// Milliseconds to wait between ESPN requests (per-command default when unset).
    #[clap(long, global = true, env = "DRAFT_BOARD_DELAY_MS")]
    pub delay_ms: Option<u64>,
}

/// Where board players come from.
#[derive(Debug, Clone, Args)]
pub struct BoardSource {
    /// Rankings CSV (name, position, team, tier, auction_value); built-in list when omitted.
    #[clap(long, short)]
    pub input: Option<PathBuf>,

    /// Season the board projects (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Maximum number of players on the board.
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub limit: usize,
}

#[derive(Debug, Parser)]
#[clap(name = "draft-board", about = "Fantasy football auction draft board")]
pub struct DraftBoardCli {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project points and a priority label for one player.
    Project {
        /// 1-based rank in the curated list.
        #[clap(long, short)]
        rank: Rank,

        /// QB, RB, WR, TE, K or DEF.
        #[clap(long, short)]
        position: Position,

        /// Tier 1 (elite) to 4 (depth).
        #[clap(long, short)]
        tier: Tier,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Generate the draft board with projections.
    Board {
        #[clap(flatten)]
        source: BoardSource,

        /// Write CSV here instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output as JSON instead of CSV.
        #[clap(long)]
        json: bool,
    },

    /// Fetch last-season stats from ESPN for board players with a known id.
    Stats {
        #[clap(flatten)]
        source: BoardSource,

        /// Write CSV here instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Season the stats come from (default: the one before the board season).
        #[clap(long)]
        stats_season: Option<Season>,
    },

    /// Find ESPN athlete ids by scanning id ranges.
    FindIds {
        /// Player name (repeatable): `-n "Lamar Jackson" -n "Puka Nacua"`.
        #[clap(long = "name", short = 'n')]
        names: Vec<String>,

        /// Write results CSV here instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Ignore cached ids and scan again.
        #[clap(long)]
        refresh: bool,
    },

    /// Track an auction draft in the local ledger.
    Draft {
        #[clap(subcommand)]
        cmd: DraftCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftCmd {
    /// Load a board into the ledger (players matched by name).
    Import {
        #[clap(flatten)]
        source: BoardSource,
    },

    /// Apply a tier sheet CSV (tier,name,position_rank).
    Tiers {
        #[clap(long, short)]
        input: PathBuf,
    },

    /// Record a drafted player and price.
    Pick {
        name: String,

        #[clap(long)]
        price: f64,

        /// Roster slot, e.g. RB1 or FLEX.
        #[clap(long)]
        slot: Option<String>,
    },

    /// Undo a pick.
    Release { name: String },

    /// List undrafted players by rank.
    Available {
        #[clap(long, short)]
        position: Option<Position>,

        #[clap(long)]
        limit: Option<usize>,

        #[clap(long)]
        json: bool,
    },

    /// Show drafted players.
    Roster {
        #[clap(long)]
        json: bool,
    },

    /// Show budget spent, remaining and average per open slot.
    Budget {
        #[clap(long)]
        json: bool,
    },

    /// Add a target or change its priority (1 = highest).
    Target {
        name: String,

        #[clap(long)]
        priority: u32,
    },

    /// Remove a target.
    Untarget { name: String },

    /// List undrafted targets by priority.
    Targets {
        #[clap(long)]
        json: bool,
    },
}
