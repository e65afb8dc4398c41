use crate::core::lenient::{de_lenient_int, de_string_or_empty};
use serde::{Deserialize, Serialize};


/// One team's season record from `lookuptable.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StandingsRow {
    #[serde(rename = "strTeam", default, deserialize_with = "de_string_or_empty")]
    pub team: String,
    #[serde(rename = "intRank", default, deserialize_with = "de_lenient_int")]
    pub rank: Option<u32>,
    #[serde(rename = "intPlayed", default, deserialize_with = "de_lenient_int")]
    pub played: Option<u32>,
    #[serde(rename = "intWin", default, deserialize_with = "de_lenient_int")]
    pub wins: Option<u32>,
    #[serde(rename = "intGoalsFor", default, deserialize_with = "de_lenient_int")]
    pub goals_for: Option<u32>,
    #[serde(rename = "intGoalsAgainst", default, deserialize_with = "de_lenient_int")]
    pub goals_against: Option<u32>,
    #[serde(
        rename = "intGoalDifference",
        default,
        deserialize_with = "de_lenient_int"
    )]
    pub goal_difference: Option<i32>,
}

/// A completed match from `eventsround.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureResult {
    #[serde(rename = "strHomeTeam", default, deserialize_with = "de_string_or_empty")]
    pub home_team: String,
    #[serde(rename = "strAwayTeam", default, deserialize_with = "de_string_or_empty")]
    pub away_team: String,
    #[serde(rename = "intHomeScore", default, deserialize_with = "de_lenient_int")]
    pub home_score: Option<u32>,
    #[serde(rename = "intAwayScore", default, deserialize_with = "de_lenient_int")]
    pub away_score: Option<u32>,
}

/// A club from `search_all_teams.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamInfo {
    #[serde(rename = "idTeam", default, deserialize_with = "de_string_or_empty")]
    pub id: String,
    #[serde(rename = "strTeam", default, deserialize_with = "de_string_or_empty")]
    pub name: String,
    #[serde(rename = "strBadge", default)]
    pub badge: Option<String>,
    #[serde(rename = "strStadium", default)]
    pub stadium: Option<String>,
    #[serde(rename = "strCountry", default)]
    pub country: Option<String>,
    #[serde(rename = "strDescriptionEN", default)]
    pub description: Option<String>,
    #[serde(rename = "intFormedYear", default, deserialize_with = "de_lenient_int")]
    pub founded: Option<u16>,
    #[serde(rename = "strEquipment", default)]
    pub jersey: Option<String>,
}

impl TeamInfo {
    /// A team known only by id and name, used for offline fallbacks.
    pub fn named(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Envelope for `lookuptable.php`. TheSportsDB sends `"table": null` for unknown leagues.
#[derive(Debug, Deserialize)]
pub struct StandingsEnvelope {
    #[serde(default)]
    pub table: Option<Vec<StandingsRow>>,
}

/// Envelope for `eventsround.php`.
#[derive(Debug, Deserialize)]
pub struct EventsEnvelope {
    #[serde(default)]
    pub events: Option<Vec<FixtureResult>>,
}

/// Envelope for `search_all_teams.php`.
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Option<Vec<TeamInfo>>,
}
