//! Screen navigation as an explicit state machine.
//!
//! The app moves Leagues → Teams → Prediction and back. [`View::transition`]
//! is pure: it borrows the current view and returns the next one, so a
//! rejected event leaves the caller's state untouched.

use crate::{sportsdb::types::TeamInfo, League, PredictorError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Leagues,
    Teams {
        league: League,
    },
    Prediction {
        league: League,
        home: TeamInfo,
        away: TeamInfo,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectLeague(League),
    SelectTeams { home: TeamInfo, away: TeamInfo },
    BackToLeagues,
    BackToTeams,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Leagues => "leagues",
            View::Teams { .. } => "teams",
            View::Prediction { .. } => "prediction",
        }
    }

    pub fn league(&self) -> Option<League> {
        match self {
            View::Leagues => None,
            View::Teams { league } | View::Prediction { league, .. } => Some(*league),
        }
    }

    pub fn transition(&self, event: Event) -> Result<View> {
        match (self, event) {
            (View::Leagues, Event::SelectLeague(league)) => Ok(View::Teams { league }),
            (View::Teams { league }, Event::SelectTeams { home, away }) => Ok(View::Prediction {
                league: *league,
                home,
                away,
            }),
            (View::Teams { .. }, Event::BackToLeagues) => Ok(View::Leagues),
            (View::Prediction { league, .. }, Event::BackToTeams) => {
                Ok(View::Teams { league: *league })
            }
            (view, event) => Err(PredictorError::InvalidTransition {
                view: view.name(),
                event: event.name(),
            }),
        }
    }
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SelectLeague(_) => "select league",
            Event::SelectTeams { .. } => "select teams",
            Event::BackToLeagues => "back to leagues",
            Event::BackToTeams => "back to teams",
        }
    }
}

/// Home/away picks on the teams screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSelection {
    pub home: Option<TeamInfo>,
    pub away: Option<TeamInfo>,
}

impl TeamSelection {
    /// Click semantics: the first pick is home, a different second pick is
    /// away, and picking a selected team again clears it.
    pub fn toggle(&mut self, team: &TeamInfo) {
        let is_home = self.home.as_ref().is_some_and(|h| h.id == team.id);
        let is_away = self.away.as_ref().is_some_and(|a| a.id == team.id);

        if self.home.is_none() && !is_away {
            self.home = Some(team.clone());
        } else if self.away.is_none() && !is_home {
            self.away = Some(team.clone());
        } else if is_home {
            self.home = None;
        } else if is_away {
            self.away = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    /// "Home", "Away", or `None` for an unselected team.
    pub fn role_of(&self, team: &TeamInfo) -> Option<&'static str> {
        if self.home.as_ref().is_some_and(|h| h.id == team.id) {
            Some("Home")
        } else if self.away.as_ref().is_some_and(|a| a.id == team.id) {
            Some("Away")
        } else {
            None
        }
    }

    pub fn is_selected(&self, team: &TeamInfo) -> bool {
        self.role_of(team).is_some()
    }

    /// Consume a complete selection into the event that opens the prediction.
    pub fn into_event(self) -> Option<Event> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Some(Event::SelectTeams { home, away }),
            _ => None,
        }
    }
}
