//! Recent-form aggregation.
//!
//! Turns a league's standings table and the fixtures of its last few rounds
//! into the [`FeatureRecord`] the prediction service consumes. The network
//! side goes through [`SportsDataSource`]; everything else here is plain
//! arithmetic over in-memory rows, so the same inputs always give the same
//! record.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::AggregationError,
    sportsdb::{
        types::{FixtureResult, StandingsRow},
        SportsDataSource,
    },
    Season,
};


/// Number of rounds, ending at the current one, that count as recent form.
pub const FORM_WINDOW_ROUNDS: u32 = 5;

/// How many top standings rows are sampled to find the current round.
pub const ROUND_SAMPLE_ROWS: usize = 10;

/// What to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// League id as the standings source understands it.
    pub league_id: String,
    pub home_team: String,
    pub away_team: String,
    pub season: Season,
}

/// The rounds that make up recent form, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormWindow {
    rounds: Vec<u32>,
}

impl FormWindow {
    /// `current, current - 1, ...` for at most [`FORM_WINDOW_ROUNDS`] rounds,
    /// stopping before round 0.
    pub fn ending_at(current_round: u32) -> Self {
        let oldest = current_round.saturating_sub(FORM_WINDOW_ROUNDS - 1).max(1);
        Self {
            rounds: (oldest..=current_round).rev().collect(),
        }
    }

    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Normalized statistics for one fixture, sent as `match_data`.
///
/// Field names on the wire are the ones the prediction service was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "strHomeTeam")]
    pub home_team: String,
    #[serde(rename = "strAwayTeam")]
    pub away_team: String,
    #[serde(rename = "lastHome5GamesScore")]
    pub home_recent_goals: u32,
    #[serde(rename = "lastAway5GamesScore")]
    pub away_recent_goals: u32,
    #[serde(rename = "homeGoalsFor")]
    pub home_goals_for: u32,
    #[serde(rename = "homeGoalsAgainst")]
    pub home_goals_against: u32,
    #[serde(rename = "homeGD")]
    pub home_goal_diff: i32,
    #[serde(rename = "homeWins")]
    pub home_wins: u32,
    #[serde(rename = "homePlayed")]
    pub home_played: u32,
    #[serde(rename = "homeRank")]
    pub home_rank: u32,
    #[serde(rename = "awayGoalsFor")]
    pub away_goals_for: u32,
    #[serde(rename = "awayGoalsAgainst")]
    pub away_goals_against: u32,
    #[serde(rename = "awayGD")]
    pub away_goal_diff: i32,
    #[serde(rename = "awayWins")]
    pub away_wins: u32,
    #[serde(rename = "awayPlayed")]
    pub away_played: u32,
    #[serde(rename = "awayRank")]
    pub away_rank: u32,
}

/// Season-to-date figures for one side, with missing values defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonFigures {
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
    pub wins: u32,
    pub played: u32,
    pub rank: u32,
}

impl SeasonFigures {
    /// Missing rows and missing fields become 0, except `played` which becomes 1
    /// so per-game ratios downstream never divide by zero.
    pub fn from_row(row: Option<&StandingsRow>) -> Self {
        let field = |get: fn(&StandingsRow) -> Option<u32>| row.and_then(get).unwrap_or(0);
        Self {
            goals_for: field(|r| r.goals_for),
            goals_against: field(|r| r.goals_against),
            goal_diff: row.and_then(|r| r.goal_difference).unwrap_or(0),
            wins: field(|r| r.wins),
            played: row.and_then(|r| r.played).unwrap_or(1),
            rank: field(|r| r.rank),
        }
    }
}

/// Highest games-played count among the top [`ROUND_SAMPLE_ROWS`] rows.
///
/// Returns `None` when that maximum is 0 (or the table is empty): the round
/// cannot be determined.
pub fn current_round(table: &[StandingsRow]) -> Option<u32> {
    table
        .iter()
        .take(ROUND_SAMPLE_ROWS)
        .filter_map(|row| row.played)
        .max()
        .filter(|&round| round > 0)
}

/// Goals `team` scored across `fixtures`: home goals when at home, away goals
/// when away. Missing scores count as 0.
pub fn recent_goals(fixtures: &[FixtureResult], team: &str) -> u32 {
    fixtures
        .iter()
        .map(|fixture| {
            if fixture.home_team == team {
                fixture.home_score.unwrap_or(0)
            } else if fixture.away_team == team {
                fixture.away_score.unwrap_or(0)
            } else {
                0
            }
        })
        .sum()
}

/// Exact-name lookup in the standings table.
pub fn find_standing<'a>(table: &'a [StandingsRow], team: &str) -> Option<&'a StandingsRow> {
    table.iter().find(|row| row.team == team)
}

/// Assemble the record from already-fetched data.
pub fn build_feature_record(
    home_team: &str,
    away_team: &str,
    table: &[StandingsRow],
    fixtures: &[FixtureResult],
) -> FeatureRecord {
    let home = SeasonFigures::from_row(find_standing(table, home_team));
    let away = SeasonFigures::from_row(find_standing(table, away_team));

    FeatureRecord {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home_recent_goals: recent_goals(fixtures, home_team),
        away_recent_goals: recent_goals(fixtures, away_team),
        home_goals_for: home.goals_for,
        home_goals_against: home.goals_against,
        home_goal_diff: home.goal_diff,
        home_wins: home.wins,
        home_played: home.played,
        home_rank: home.rank,
        away_goals_for: away.goals_for,
        away_goals_against: away.goals_against,
        away_goal_diff: away.goal_diff,
        away_wins: away.wins,
        away_played: away.played,
        away_rank: away.rank,
    }
}

/// Fetch every round in `window`, one after another.
///
/// A round that fails to load is logged and skipped; the rest still count.
pub async fn collect_window_fixtures<S>(
    source: &S,
    league_id: &str,
    window: &FormWindow,
    season: &Season,
) -> Vec<FixtureResult>
where
    S: SportsDataSource + ?Sized,
{
    let mut fixtures = Vec::new();

    for &round in window.rounds() {
        match source.round_fixtures(league_id, round, season).await {
            Ok(events) => {
                debug!(round, count = events.len(), "fetched round fixtures");
                fixtures.extend(events);
            }
            Err(e) => {
                let skipped = AggregationError::RoundFetchFailed {
                    round,
                    source: Box::new(e),
                };
                warn!(league_id, "{skipped}; skipping round");
            }
        }
    }

    fixtures
}

/// Run the whole aggregation for one prediction request.
///
/// Fails only when the standings table is unusable; round-level failures
/// shrink the window instead.
pub async fn aggregate<S>(
    source: &S,
    request: &FormRequest,
) -> Result<FeatureRecord, AggregationError>
where
    S: SportsDataSource + ?Sized,
{
    let table = source
        .standings(&request.league_id, &request.season)
        .await
        .map_err(|e| AggregationError::StandingsRequest {
            league_id: request.league_id.clone(),
            source: Box::new(e),
        })?;

    if table.is_empty() {
        return Err(AggregationError::StandingsUnavailable {
            league_id: request.league_id.clone(),
        });
    }

    let round = current_round(&table).ok_or(AggregationError::RoundUndetermined)?;
    let window = FormWindow::ending_at(round);
    debug!(
        league_id = %request.league_id,
        current_round = round,
        rounds = ?window.rounds(),
        "resolved form window"
    );

    let fixtures =
        collect_window_fixtures(source, &request.league_id, &window, &request.season).await;

    Ok(build_feature_record(
        &request.home_team,
        &request.away_team,
        &table,
        &fixtures,
    ))
}
