//! ID types for ESPN athletes.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN athlete IDs.
///
/// # Examples
///
/// ```rust
/// use draft_board::EspnId;
///
/// let id: EspnId = "3128390".parse().unwrap();
/// assert_eq!(id.as_u64(), 3128390);
/// assert_eq!(id.to_string(), "3128390");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EspnId(pub u64);

impl EspnId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EspnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EspnId {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
