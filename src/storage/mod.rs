//! Draft ledger: local SQLite state for an auction draft
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Board import, tier updates, picks and targets
//! - `budget`: Auction budget summary

pub mod budget;
pub mod models;
pub mod queries;
pub mod schema;


pub use budget::{DEFAULT_ROSTER_SLOTS, DEFAULT_TOTAL_BUDGET};
pub use models::*;
pub use schema::DraftLedger;
