//! Fantasy football position types.

use crate::error::DraftError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Draftable positions on the board.
///
/// The set is closed: anything that doesn't parse into one of these variants
/// is rejected at the boundary instead of being scored as a kicker.
///
/// # Examples
///
/// ```rust
/// use draft_board::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
/// assert!("LB".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Canonical short code, as written to CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(DraftError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
