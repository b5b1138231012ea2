//! ESPN athlete lookups.
//!
//! - `http`: client for the public athlete overview/splits endpoints
//! - `types`: response models
//! - `stats`: season stat extraction and PPR scoring
//! - `discovery`: finding athlete ids by scanning id ranges

pub mod discovery;
pub mod http;
pub mod stats;
pub mod types;

pub use http::{EspnClient, ESPN_WEB_BASE_URL};
pub use stats::SeasonStats;
