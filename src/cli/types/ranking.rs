//! Rank and tier types for curated player lists.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-based ordinal position of a player in a curated list.
///
/// # Examples
///
/// ```rust
/// use draft_board::Rank;
///
/// assert_eq!(Rank::new(12).unwrap().as_u32(), 12);
/// assert!(Rank::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u32);

impl Rank {
    pub fn new(rank: u32) -> Result<Self> {
        if rank == 0 {
            return Err(DraftError::InvalidRank { rank: 0 });
        }
        Ok(Self(rank))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Rank {
    type Error = DraftError;

    fn try_from(value: u32) -> Result<Self> {
        Rank::new(value)
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> u32 {
        rank.0
    }
}

impl TryFrom<i64> for Rank {
    type Error = DraftError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map_err(|_| DraftError::InvalidRank { rank: value })
            .and_then(Rank::new)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let raw: i64 = s.trim().parse()?;
        Rank::try_from(raw)
    }
}

/// Coarse quality bucket: 1 = elite, 2 = starter, 3 = solid, 4 = depth.
///
/// Values outside 1..=4 are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(tier: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&tier) {
            return Err(DraftError::InvalidTier { tier: tier as i64 });
        }
        Ok(Self(tier))
    }

    /// The deepest tier, used for depth-pool players appended to a board.
    pub fn depth() -> Self {
        Self(Self::MAX)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Tier {
    type Error = DraftError;

    fn try_from(value: u8) -> Result<Self> {
        Tier::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl TryFrom<i64> for Tier {
    type Error = DraftError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| DraftError::InvalidTier { tier: value })
            .and_then(Tier::new)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tier {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let raw: i64 = s.trim().parse()?;
        Tier::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_rejects_zero() {
        assert!(matches!(
            Rank::new(0),
            Err(DraftError::InvalidRank { rank: 0 })
        ));
    }

    #[test]
    fn test_rank_from_negative() {
        let err = Rank::try_from(-4i64).unwrap_err();
        assert!(matches!(err, DraftError::InvalidRank { rank: -4 }));
    }

    #[test]
    fn test_rank_from_str() {
        assert_eq!("121".parse::<Rank>().unwrap().as_u32(), 121);
        assert!("0".parse::<Rank>().unwrap_err().is_invalid_argument());
        assert!(matches!(
            "first".parse::<Rank>(),
            Err(DraftError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_tier_bounds() {
        for t in 1..=4u8 {
            assert_eq!(Tier::new(t).unwrap().as_u8(), t);
        }
        assert!(Tier::new(0).is_err());
        assert!(Tier::new(5).is_err());
    }

    #[test]
    fn test_tier_from_large_value() {
        let err = Tier::try_from(300i64).unwrap_err();
        assert!(matches!(err, DraftError::InvalidTier { tier: 300 }));
    }

    #[test]
    fn test_tier_serde_validates() {
        let tier: Tier = serde_json::from_str("2").unwrap();
        assert_eq!(tier.as_u8(), 2);
        assert!(serde_json::from_str::<Tier>("7").is_err());
    }

    #[test]
    fn test_rank_serde_validates() {
        assert!(serde_json::from_str::<Rank>("0").is_err());
        assert_eq!(serde_json::to_string(&Rank::new(9).unwrap()).unwrap(), "9");
    }

    #[test]
    fn test_depth_tier() {
        assert_eq!(Tier::depth().as_u8(), 4);
    }
}
