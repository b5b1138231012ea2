use serde::Serialize;

use super::{
    http::EspnClient,
    types::{SplitCategory, SplitsResponse},
};
use crate::{projection::round_to_tenth, EspnId, Result, Season};


/// PPR weights.
const POINTS_PER_RECEPTION: f64 = 1.0;
const POINTS_PER_RECEIVING_YARD: f64 = 0.1;
const POINTS_PER_RECEIVING_TD: f64 = 6.0;
const POINTS_PER_RUSHING_YARD: f64 = 0.1;
const POINTS_PER_RUSHING_TD: f64 = 6.0;
const POINTS_PER_PASSING_YARD: f64 = 0.04;
const POINTS_PER_PASSING_TD: f64 = 4.0;

/// Season totals for the stats that feed PPR scoring. Missing stats are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeasonStats {
    pub receptions: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub passing_yards: f64,
    pub passing_tds: f64,
}

impl SeasonStats {
    /// Pull season totals out of a splits payload.
    ///
    /// Only the category named `Total` or displayed as `"<season> Season"`
    /// counts. Stat names are compared lower-cased with spaces removed, and
    /// must match exactly so per-game and per-attempt variants are ignored.
    pub fn from_splits(splits: &SplitsResponse, season: Season) -> Self {
        let season_label = format!("{} Season", season);
        let mut stats = Self::default();

        for category in splits
            .splits
            .categories
            .iter()
            .filter(|c| is_season_total(c, &season_label))
        {
            for entry in &category.stats {
                if let Some(slot) = stats.slot_mut(&entry.name) {
                    *slot = entry.value;
                }
            }
        }

        stats
    }

    fn slot_mut(&mut self, stat_name: &str) -> Option<&mut f64> {
        let key: String = stat_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "receptions" => Some(&mut self.receptions),
            "receivingyards" => Some(&mut self.receiving_yards),
            "receivingtouchdowns" => Some(&mut self.receiving_tds),
            "rushingyards" => Some(&mut self.rushing_yards),
            "rushingtouchdowns" => Some(&mut self.rushing_tds),
            "passingyards" => Some(&mut self.passing_yards),
            "passingtouchdowns" => Some(&mut self.passing_tds),
            _ => None,
        }
    }

    /// PPR fantasy points, rounded to one decimal.
    pub fn fantasy_points(&self) -> f64 {
        let points = self.receptions * POINTS_PER_RECEPTION
            + self.receiving_yards * POINTS_PER_RECEIVING_YARD
            + self.receiving_tds * POINTS_PER_RECEIVING_TD
            + self.rushing_yards * POINTS_PER_RUSHING_YARD
            + self.rushing_tds * POINTS_PER_RUSHING_TD
            + self.passing_yards * POINTS_PER_PASSING_YARD
            + self.passing_tds * POINTS_PER_PASSING_TD;

        round_to_tenth(points)
    }
}

fn is_season_total(category: &SplitCategory, season_label: &str) -> bool {
    category.name == "Total" || category.display_name == season_label
}

/// Fetch one athlete's splits and extract the totals for `season`.
pub async fn fetch_season_stats(
    client: &EspnClient,
    id: EspnId,
    season: Season,
) -> Result<SeasonStats> {
    let splits = client.athlete_splits(id).await?;
    Ok(SeasonStats::from_splits(&splits, season))
}
