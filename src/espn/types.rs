//! Response models for the athlete endpoints.
//!
//! ESPN changes these payloads without notice, so every field is defaulted
//! and a missing section deserializes to an empty value instead of failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// Stat values arrive as numbers or as display strings ("1,204").
fn de_stat_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.replace(',', "").trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// `/athletes/{id}/overview`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AthleteOverview {
    #[serde(default)]
    pub athlete: Option<AthleteInfo>,
}

impl AthleteOverview {
    /// Display name, falling back to the full name.
    pub fn name(&self) -> Option<&str> {
        let athlete = self.athlete.as_ref()?;
        athlete
            .display_name
            .as_deref()
            .or(athlete.full_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Team abbreviation, `UNK` when the payload has none.
    pub fn team_abbreviation(&self) -> &str {
        self.athlete
            .as_ref()
            .and_then(|a| a.team.as_ref())
            .and_then(|t| t.abbreviation.as_deref())
            .unwrap_or("UNK")
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AthleteInfo {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// `/athletes/{id}/splits`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SplitsResponse {
    #[serde(default)]
    pub splits: Splits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Splits {
    #[serde(default)]
    pub categories: Vec<SplitCategory>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SplitCategory {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatEntry {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "de_stat_value", default)]
    pub value: f64,
}
