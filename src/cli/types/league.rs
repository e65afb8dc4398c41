//! The fixed catalog of supported leagues.

use crate::error::PredictorError;
use std::fmt;
use std::str::FromStr;

/// Leagues the predictor knows how to query.
///
/// Each league carries three identities:
///
/// - **key**: the short name the prediction service expects (`epl`, `liga`, ...)
/// - **SportsDB id**: the numeric id used by the standings and fixtures endpoints
/// - **search name**: the name TheSportsDB uses in `search_all_teams.php`
///
/// # Examples
///
/// ```rust
/// use football_predictor::League;
///
/// let league: League = "epl".parse().unwrap();
/// assert_eq!(league, League::PremierLeague);
/// assert_eq!(league.sportsdb_id(), "4328");
/// assert_eq!("Serie A".parse::<League>().unwrap().key(), "serie");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
    Ligue1,
    Botola,
}

impl League {
    /// Every league, in the order they are presented to the user.
    pub const ALL: [League; 6] = [
        League::PremierLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ligue1,
        League::Botola,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            League::PremierLeague => "English Premier League",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::SerieA => "Serie A",
            League::Ligue1 => "Ligue 1",
            League::Botola => "Moroccan League",
        }
    }

    /// Key sent to the prediction service alongside the features.
    pub fn key(&self) -> &'static str {
        match self {
            League::PremierLeague => "epl",
            League::LaLiga => "liga",
            League::Bundesliga => "bundesliga",
            League::SerieA => "serie",
            League::Ligue1 => "ligue",
            League::Botola => "inwi",
        }
    }

    pub fn sportsdb_id(&self) -> &'static str {
        match self {
            League::PremierLeague => "4328",
            League::LaLiga => "4335",
            League::Bundesliga => "4331",
            League::SerieA => "4332",
            League::Ligue1 => "4334",
            League::Botola => "4520",
        }
    }

    pub fn search_name(&self) -> &'static str {
        match self {
            League::PremierLeague => "English Premier League",
            League::LaLiga => "Spanish La Liga",
            League::Bundesliga => "German Bundesliga",
            League::SerieA => "Italian Serie A",
            League::Ligue1 => "French Ligue 1",
            League::Botola => "Moroccan Championship",
        }
    }

    pub fn logo(&self) -> &'static str {
        match self {
            League::PremierLeague => "https://media.api-sports.io/football/leagues/39.png",
            League::LaLiga => "https://media.api-sports.io/football/leagues/140.png",
            League::Bundesliga => "https://media.api-sports.io/football/leagues/78.png",
            League::SerieA => "https://media.api-sports.io/football/leagues/135.png",
            League::Ligue1 => "https://media.api-sports.io/football/leagues/61.png",
            League::Botola => "https://media.api-sports.io/football/leagues/200.png",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for League {
    type Err = PredictorError;

    /// Accepts the key, the display name, the search name, or the SportsDB id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        League::ALL
            .into_iter()
            .find(|league| {
                league.key().eq_ignore_ascii_case(wanted)
                    || league.name().eq_ignore_ascii_case(wanted)
                    || league.search_name().eq_ignore_ascii_case(wanted)
                    || league.sportsdb_id() == wanted
            })
            .ok_or_else(|| PredictorError::UnknownLeague {
                value: s.to_string(),
            })
    }
}
