//! Finding ESPN athlete ids by probing candidate id ranges.
//!
//! There is no public search endpoint, so a target name is resolved by
//! fetching overviews for ids in a handful of known-good ranges and comparing
//! names. Every probe is followed by a fixed delay.

use lru::LruCache;
use std::{num::NonZeroUsize, time::Duration};
use tracing::{debug, info};

use super::http::EspnClient;
use crate::{DraftError, EspnId};

#[cfg(test)]
mod tests;

/// Delay between overview probes.
pub const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(100);

/// Names probed when `find-ids` is given none.
pub const PRIORITY_PLAYERS: &[&str] = &[
    "Lamar Jackson",
    "Ja'Marr Chase",
    "Bijan Robinson",
    "CeeDee Lamb",
    "Saquon Barkley",
    "Amon-Ra St. Brown",
    "Christian McCaffrey",
    "Puka Nacua",
    "Joe Burrow",
    "Jalen Hurts",
    "Patrick Mahomes",
];

const MEMO_CAPACITY: usize = 8192;

/// Lower-case, drop `.` and `'`, collapse whitespace.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['.', '\''], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Names match when either normalised form contains the other.
pub fn names_match(target: &str, found: &str) -> bool {
    let target = normalize_name(target);
    let found = normalize_name(found);
    if target.is_empty() || found.is_empty() {
        return false;
    }
    target.contains(&found) || found.contains(&target)
}

/// Half-open id range `[start, end)` sampled every `step` ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
    pub step: u64,
}

impl IdRange {
    pub const fn new(start: u64, end: u64, step: u64) -> Self {
        Self { start, end, step }
    }

    pub fn ids(&self) -> impl Iterator<Item = EspnId> {
        (self.start..self.end)
            .step_by(self.step.max(1) as usize)
            .map(EspnId::new)
    }

    pub fn len(&self) -> usize {
        self.ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Ranges where active NFL athletes have been seen.
pub fn default_ranges() -> Vec<IdRange> {
    vec![
        IdRange::new(3_000_000, 3_001_000, 50),
        IdRange::new(3_100_000, 3_101_000, 50),
        IdRange::new(3_200_000, 3_201_000, 50),
        IdRange::new(4_000_000, 4_001_000, 50),
        IdRange::new(4_100_000, 4_101_000, 50),
        IdRange::new(10_000, 20_000, 100),
        IdRange::new(20_000, 30_000, 100),
        IdRange::new(16_800, 16_850, 1),
        IdRange::new(3_128_000, 3_129_000, 10),
        IdRange::new(3_139_000, 3_140_000, 10),
    ]
}

/// Scans id ranges for athletes by name.
///
/// Names seen along the way are memoised per id, so a second search over the
/// same ranges costs no requests for ids already probed.
pub struct IdFinder<'a> {
    client: &'a EspnClient,
    delay: Duration,
    seen: LruCache<EspnId, Option<String>>,
}

impl<'a> IdFinder<'a> {
    pub fn new(client: &'a EspnClient, delay: Duration) -> Self {
        let capacity = NonZeroUsize::new(MEMO_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            client,
            delay,
            seen: LruCache::new(capacity),
        }
    }

    /// First id in `ranges` whose athlete name matches `target`.
    pub async fn find(&mut self, target: &str, ranges: &[IdRange]) -> Option<EspnId> {
        for range in ranges {
            for id in range.ids() {
                let Some(found) = self.athlete_name(id).await else {
                    continue;
                };
                if names_match(target, &found) {
                    info!("Found {} -> {} ({})", target, id, found);
                    return Some(id);
                }
            }
        }
        debug!("No id found for {}", target);
        None
    }

    /// Athletes seen while scanning, sorted by id.
    pub fn discovered(&self) -> Vec<(EspnId, String)> {
        let mut players: Vec<_> = self
            .seen
            .iter()
            .filter_map(|(id, name)| name.clone().map(|n| (*id, n)))
            .collect();
        players.sort_by_key(|(id, _)| *id);
        players
    }

    async fn athlete_name(&mut self, id: EspnId) -> Option<String> {
        if let Some(cached) = self.seen.get(&id) {
            return cached.clone();
        }

        let name = match self.client.athlete_overview(id).await {
            Ok(overview) => {
                let name = overview.name().map(str::to_string);
                self.seen.put(id, name.clone());
                name
            }
            Err(DraftError::Http(e)) if e.status().is_some_and(|s| s.is_client_error()) => {
                debug!("No athlete at {}: {}", id, e);
                self.seen.put(id, None);
                None
            }
            // transient failures stay unmemoised so a later search retries the id
            Err(e) => {
                debug!("Lookup of {} failed: {}", id, e);
                None
            }
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        name
    }
}
