//! Error types for the football match predictor

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid season '{value}' (expected YYYY or YYYY-YYYY)")]
    InvalidSeason { value: String },

    #[error("Unknown league: {value}")]
    UnknownLeague { value: String },

    #[error("TheSportsDB returned no {what}")]
    NoData { what: &'static str },

    #[error("Cannot apply {event} while on the {view} screen")]
    InvalidTransition {
        view: &'static str,
        event: &'static str,
    },

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

/// Failures of the form aggregator.
///
/// `RoundFetchFailed` never escapes [`crate::form::aggregate`]; it is logged
/// and the round is skipped. The other variants abort the aggregation.
#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("Standings table unavailable for league {league_id}")]
    StandingsUnavailable { league_id: String },

    #[error("Standings request for league {league_id} failed: {source}")]
    StandingsRequest {
        league_id: String,
        #[source]
        source: Box<PredictorError>,
    },

    #[error("Could not determine current round")]
    RoundUndetermined,

    #[error("Fixtures for round {round} unavailable: {source}")]
    RoundFetchFailed {
        round: u32,
        #[source]
        source: Box<PredictorError>,
    },
}
