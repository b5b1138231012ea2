//! File system caching: cache locations and the on-disk ESPN id cache.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{EspnId, Result};

#[cfg(test)]
mod tests;

/// Root: ~/.cache/draft-board (or ./.cache/draft-board without a home dir)
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("draft-board")
}

/// Path: ~/.cache/draft-board/espn-ids.json
pub fn id_cache_path() -> PathBuf {
    cache_root().join("espn-ids.json")
}

/// Path: ~/.cache/draft-board/draft.db
pub fn database_path() -> PathBuf {
    cache_root().join("draft.db")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// ESPN ids discovered by range scanning, keyed by the name that was searched.
///
/// Keys are stored normalised (see [`crate::espn::discovery::normalize_name`])
/// so "A.J. Brown" and "AJ Brown" share an entry.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdCache {
    #[serde(default)]
    ids: BTreeMap<String, EspnId>,
}

impl IdCache {
    /// Load from `path`; a missing or unreadable file yields an empty cache.
    pub fn load(path: &Path) -> Self {
        try_read_to_string(path)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<EspnId> {
        self.ids
            .get(&crate::espn::discovery::normalize_name(name))
            .copied()
    }

    pub fn insert(&mut self, name: &str, id: EspnId) {
        self.ids
            .insert(crate::espn::discovery::normalize_name(name), id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
