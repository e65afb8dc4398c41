use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    form::FeatureRecord,
    predict::{
        types::{Prediction, PredictionEnvelope, PredictionRequest},
        PredictionService,
    },
    Result,
};

/// Client for the remote prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    url: String,
}

impl PredictionClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, league_key: &str, features: &FeatureRecord) -> Result<Prediction> {
        let body = PredictionRequest {
            league: league_key,
            match_data: features,
        };
        debug!(url = %self.url, league = league_key, "POST prediction");

        let envelope = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<PredictionEnvelope>()
            .await?;

        Ok(envelope.into_prediction())
    }
}
