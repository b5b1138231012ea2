//! Error types for the draft board CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid tier: {tier} (expected 1-4)")]
    InvalidTier { tier: i64 },

    #[error("Invalid rank: {rank} (ranks start at 1)")]
    InvalidRank { rank: i64 },

    #[error("Invalid price: {price}")]
    InvalidPrice { price: f64 },

    #[error("Invalid target priority: {priority} (priorities start at 1)")]
    InvalidPriority { priority: u32 },

    #[error("CSV error on line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Player already drafted: {name}")]
    AlreadyDrafted { name: String },

    #[error("Budget exceeded: {message}")]
    Budget { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl DraftError {
    /// True for the errors raised when a caller hands the projection engine
    /// (or a board import) a rank, tier or position outside its domain.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DraftError::InvalidPosition { .. }
                | DraftError::InvalidTier { .. }
                | DraftError::InvalidRank { .. }
        )
    }
}
