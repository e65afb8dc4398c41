//! In-memory sources shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    form::FeatureRecord,
    predict::{types::Prediction, PredictionService},
    sportsdb::{
        types::{FixtureResult, StandingsRow, TeamInfo},
        SportsDataSource,
    },
    PredictorError, Result, Season,
};

pub fn row(team: &str, rank: u32, played: u32) -> StandingsRow {
    StandingsRow {
        team: team.to_string(),
        rank: Some(rank),
        played: Some(played),
        ..StandingsRow::default()
    }
}

pub fn fixture(home: &str, away: &str, home_score: u32, away_score: u32) -> FixtureResult {
    FixtureResult {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score: Some(home_score),
        away_score: Some(away_score),
    }
}

/// Serves a fixed table and per-round fixtures. Rounds listed in
/// `failing_rounds` return an error; rounds with no entry return no events.
#[derive(Default)]
pub struct FakeSource {
    pub table: Vec<StandingsRow>,
    pub standings_fail: bool,
    pub rounds: HashMap<u32, Vec<FixtureResult>>,
    pub failing_rounds: Vec<u32>,
    pub teams: Vec<TeamInfo>,
    pub teams_fail: bool,
    pub requested_rounds: Mutex<Vec<u32>>,
}

impl FakeSource {
    pub fn with_table(table: Vec<StandingsRow>) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    pub fn round(mut self, round: u32, fixtures: Vec<FixtureResult>) -> Self {
        self.rounds.insert(round, fixtures);
        self
    }

    pub fn failing_round(mut self, round: u32) -> Self {
        self.failing_rounds.push(round);
        self
    }

    pub fn requested_rounds(&self) -> Vec<u32> {
        self.requested_rounds.lock().unwrap().clone()
    }
}

#[async_trait]
impl SportsDataSource for FakeSource {
    async fn standings(&self, _league_id: &str, _season: &Season) -> Result<Vec<StandingsRow>> {
        if self.standings_fail {
            return Err(PredictorError::NoData { what: "standings" });
        }
        Ok(self.table.clone())
    }

    async fn round_fixtures(
        &self,
        _league_id: &str,
        round: u32,
        _season: &Season,
    ) -> Result<Vec<FixtureResult>> {
        self.requested_rounds.lock().unwrap().push(round);
        if self.failing_rounds.contains(&round) {
            return Err(PredictorError::NoData { what: "events" });
        }
        Ok(self.rounds.get(&round).cloned().unwrap_or_default())
    }

    async fn teams(&self, _league_name: &str) -> Result<Vec<TeamInfo>> {
        if self.teams_fail {
            return Err(PredictorError::NoData { what: "teams" });
        }
        Ok(self.teams.clone())
    }
}

/// Returns a canned prediction (or an error) and records what it was sent.
#[derive(Default)]
pub struct FakePredictor {
    pub response: Option<Prediction>,
    pub received: Mutex<Vec<(String, FeatureRecord)>>,
}

impl FakePredictor {
    pub fn answering(prediction: Prediction) -> Self {
        Self {
            response: Some(prediction),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<(String, FeatureRecord)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionService for FakePredictor {
    async fn predict(&self, league_key: &str, features: &FeatureRecord) -> Result<Prediction> {
        self.received
            .lock()
            .unwrap()
            .push((league_key.to_string(), features.clone()));
        self.response
            .clone()
            .ok_or(PredictorError::NoData { what: "prediction" })
    }
}
