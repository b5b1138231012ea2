//! Core utilities for the draft board CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: cache locations and the persisted ESPN id cache
//! - `csv`: delimited text reading and writing

pub mod cache;
pub mod csv;

// Re-export commonly used items for convenience
pub use cache::{cache_root, database_path, id_cache_path, try_read_to_string, write_string, IdCache};
