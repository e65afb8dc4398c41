//! Prediction service access and the offline placeholder.

pub mod http;
pub mod placeholder;
pub mod types;

use async_trait::async_trait;

use crate::{form::FeatureRecord, Result};
use types::Prediction;

pub use http::PredictionClient;

/// Anything that can turn a feature record into a prediction.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, league_key: &str, features: &FeatureRecord) -> Result<Prediction>;
}
