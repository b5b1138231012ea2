//! Type-safe wrappers and enums for draft board data.

pub mod ids;
pub mod position;
pub mod ranking;
pub mod time;

pub use ids::EspnId;
pub use position::Position;
pub use ranking::{Rank, Tier};
pub use time::Season;
