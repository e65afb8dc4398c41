//! Team directory: live team lists with an offline fallback.

use serde::Serialize;
use tracing::warn;

use crate::{sportsdb::types::TeamInfo, sportsdb::SportsDataSource, League, PredictorError};

/// Teams for one league, and why the fallback list is shown if it is.
#[derive(Debug, Clone, Serialize)]
pub struct TeamListing {
    pub league: &'static str,
    pub teams: Vec<TeamInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl TeamListing {
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }

    /// Look a team up by 1-based position, id, or case-insensitive name.
    pub fn find(&self, query: &str) -> Option<&TeamInfo> {
        let query = query.trim();
        if let Ok(n) = query.parse::<usize>() {
            if let Some(team) = n.checked_sub(1).and_then(|i| self.teams.get(i)) {
                return Some(team);
            }
        }
        self.teams
            .iter()
            .find(|t| t.id == query || t.name.eq_ignore_ascii_case(query))
    }
}

/// Fetch a league's teams; on any failure fall back to a fixed list.
pub async fn load_teams<S>(source: &S, league: League) -> TeamListing
where
    S: SportsDataSource + ?Sized,
{
    let fetched = match source.teams(league.search_name()).await {
        Ok(teams) if teams.is_empty() => Err(PredictorError::NoData { what: "teams" }),
        other => other,
    };

    match fetched {
        Ok(teams) => TeamListing {
            league: league.name(),
            teams,
            fallback_reason: None,
        },
        Err(e) => {
            warn!(league = league.name(), error = %e, "team lookup failed; using fallback list");
            TeamListing {
                league: league.name(),
                teams: fallback_teams(Some(league)),
                fallback_reason: Some(e.to_string()),
            }
        }
    }
}

const BADGE_BASE: &str = "https://www.thesportsdb.com/images/media/team/badge";

fn badged(id: &str, name: &str, badge: &str) -> TeamInfo {
    TeamInfo {
        badge: Some(format!("{BADGE_BASE}/{badge}")),
        ..TeamInfo::named(id, name)
    }
}

/// Offline team lists. `None` yields two generic placeholders.
pub fn fallback_teams(league: Option<League>) -> Vec<TeamInfo> {
    match league {
        Some(League::PremierLeague) => vec![
            badged("133604", "Arsenal", "xtwxyt1421431860.png"),
            badged("133602", "Chelsea", "uyhbfe1612467038.png"),
            badged("133601", "Liverpool", "vwpvry1467462651.png"),
            badged("133610", "Manchester City", "qttvpr1448813355.png"),
            badged("133612", "Manchester United", "trwqyw1448813215.png"),
        ],
        Some(League::LaLiga) => vec![
            badged("133738", "Barcelona", "xxvryt1448813219.png"),
            badged("133739", "Real Madrid", "qzqkst1448813215.png"),
            badged("133740", "Atletico Madrid", "yvwvtu1448813215.png"),
            badged("133741", "Sevilla", "rrrrtt1448813215.png"),
            badged("133742", "Valencia", "tyttyy1448813215.png"),
        ],
        Some(League::Bundesliga) => vec![
            badged("133674", "Bayern Munich", "xxvryt1448813219.png"),
            badged("133675", "Borussia Dortmund", "qzqkst1448813215.png"),
        ],
        Some(League::SerieA) => vec![
            badged("133602", "Juventus", "xxvryt1448813219.png"),
            badged("133603", "AC Milan", "qzqkst1448813215.png"),
        ],
        Some(League::Ligue1) => vec![
            badged("133613", "PSG", "xxvryt1448813219.png"),
            badged("133614", "Marseille", "qzqkst1448813215.png"),
        ],
        Some(League::Botola) => vec![
            badged("136157", "Wydad Casablanca", "wydad.png"),
            badged("136158", "Raja Casablanca", "raja.png"),
            badged("136159", "AS FAR", "far.png"),
        ],
        None => vec![TeamInfo::named("1", "Team 1"), TeamInfo::named("2", "Team 2")],
    }
}
