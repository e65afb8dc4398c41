use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::lenient::de_f64_or_zero;
use crate::form::FeatureRecord;

/// Body POSTed to the prediction service.
#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub league: &'a str,
    pub match_data: &'a FeatureRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Home,
    Away,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::Home => "home",
            Winner::Away => "away",
            Winner::Draw => "draw",
        };
        write!(f, "{}", s)
    }
}

/// Win probabilities in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Probability {
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub home: f64,
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub draw: f64,
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub away: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ExpectedGoals {
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub home: f64,
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub away: f64,
}

/// A predicted match outcome, as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Prediction {
    pub score: String,
    pub winner: Winner,
    #[serde(default)]
    pub probability: Probability,
    #[serde(default)]
    pub expected_goals: ExpectedGoals,
    #[serde(default)]
    pub both_teams_to_score: bool,
    #[serde(default, deserialize_with = "de_f64_or_zero")]
    pub over_under: f64,
}

/// The service either wraps the prediction in `combined_prediction` or
/// returns it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictionEnvelope {
    Combined { combined_prediction: Prediction },
    Direct(Prediction),
}

impl PredictionEnvelope {
    pub fn into_prediction(self) -> Prediction {
        match self {
            PredictionEnvelope::Combined {
                combined_prediction,
            } => combined_prediction,
            PredictionEnvelope::Direct(prediction) => prediction,
        }
    }
}
