//! Projection engine: rank + position + tier in, projected points and a
//! draft-priority label out.
//!
//! There is exactly one scoring formula. Every caller that needs projected
//! points for a board row goes through [`project`] (or [`project_raw`] when
//! the inputs have not been validated yet).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Position, Rank, Result, Tier};


/// No projection drops below this many points.
pub const POINTS_FLOOR: f64 = 30.0;

/// Per-position constants of the projection formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub base_points: f64,
    pub tier_factor: f64,
    pub rank_factor: f64,
}

impl ScoringProfile {
    pub fn for_position(position: Position) -> Self {
        match position {
            Position::QB => Self::new(280.0, 30.0, 1.5),
            Position::RB => Self::new(250.0, 25.0, 1.2),
            Position::WR => Self::new(240.0, 20.0, 1.0),
            Position::TE => Self::new(160.0, 15.0, 0.8),
            Position::K | Position::DEF => Self::new(90.0, 5.0, 0.3),
        }
    }

    const fn new(base_points: f64, tier_factor: f64, rank_factor: f64) -> Self {
        Self {
            base_points,
            tier_factor,
            rank_factor,
        }
    }

    /// Unclamped, unrounded points.
    pub fn raw_points(&self, rank: Rank, tier: Tier) -> f64 {
        let tier_penalty = self.tier_factor * f64::from(tier.as_u8());
        let rank_penalty = self.rank_factor * f64::from(rank.as_u32());
        self.base_points - tier_penalty - rank_penalty
    }
}

/// Draft urgency, derived from rank alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLabel {
    #[serde(rename = "Must Draft")]
    MustDraft,
    #[serde(rename = "High Priority")]
    HighPriority,
    #[serde(rename = "Good Value")]
    GoodValue,
    #[serde(rename = "Depth/Handcuff")]
    DepthHandcuff,
}

impl PriorityLabel {
    pub fn for_rank(rank: Rank) -> Self {
        match rank.as_u32() {
            0..=24 => PriorityLabel::MustDraft,
            25..=60 => PriorityLabel::HighPriority,
            61..=120 => PriorityLabel::GoodValue,
            _ => PriorityLabel::DepthHandcuff,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::MustDraft => "Must Draft",
            PriorityLabel::HighPriority => "High Priority",
            PriorityLabel::GoodValue => "Good Value",
            PriorityLabel::DepthHandcuff => "Depth/Handcuff",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub projected_points: f64,
    pub priority_label: PriorityLabel,
}

/// Project a player's season points and draft priority.
///
/// `points = max(base - tier_factor * tier - rank_factor * rank, 30)`,
/// rounded half away from zero to one decimal place.
///
/// # Examples
///
/// ```rust
/// use draft_board::{projection::{project, PriorityLabel}, Position, Rank, Tier};
///
/// let result = project(Rank::new(1).unwrap(), Position::QB, Tier::new(1).unwrap());
/// assert_eq!(result.projected_points, 248.5);
/// assert_eq!(result.priority_label, PriorityLabel::MustDraft);
/// ```
pub fn project(rank: Rank, position: Position, tier: Tier) -> ProjectionResult {
    let raw = ScoringProfile::for_position(position).raw_points(rank, tier);
    ProjectionResult {
        projected_points: round_to_tenth(raw.max(POINTS_FLOOR)),
        priority_label: PriorityLabel::for_rank(rank),
    }
}

/// Validate untyped inputs, then [`project`].
///
/// Fails with an invalid-argument error for `rank < 1`, a tier outside
/// 1..=4, or a position string that isn't one of QB/RB/WR/TE/K/DEF.
pub fn project_raw(rank: i64, position: &str, tier: i64) -> Result<ProjectionResult> {
    let rank = Rank::try_from(rank)?;
    let position: Position = position.parse()?;
    let tier = Tier::try_from(tier)?;
    Ok(project(rank, position, tier))
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
