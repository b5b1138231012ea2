//! Fantasy Football Draft Board Library
//!
//! Tools for preparing an auction draft: a curated player list becomes a
//! ranked draft board with projected points, ESPN athlete lookups fill in ids
//! and last-season stats, and a local ledger tracks picks, targets and budget.
//!
//! ## Features
//!
//! - **Projection Engine**: Deterministic points and priority label from rank, position and tier
//! - **Draft Board**: Built-in or CSV-imported rankings, written as CSV or JSON
//! - **ESPN Lookups**: Athlete overview/splits, PPR scoring, id discovery by range scanning
//! - **Draft Ledger**: SQLite record of picks, tier updates, targets and auction budget
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_board::{projection::project, Position, Rank, Tier};
//!
//! # fn example() -> draft_board::Result<()> {
//! let result = project(Rank::new(50)?, Position::WR, Tier::new(2)?);
//! assert_eq!(result.projected_points, 150.0);
//! assert_eq!(result.priority_label.as_str(), "High Priority");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DRAFT_BOARD_DB=~/drafts/2025.db
//! export DRAFT_BOARD_BUDGET=200
//! export DRAFT_BOARD_DELAY_MS=250
//! ```

pub mod board;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod projection;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{EspnId, Position, Rank, Season, Tier};
pub use error::{DraftError, Result};
pub use projection::{project, PriorityLabel, ProjectionResult};
