//! Resources shared by the network-backed commands.

use crate::{
    config::Config,
    core::build_client,
    predict::PredictionClient,
    sportsdb::SportsDbClient,
    Result,
};

/// Clients wired to the configured endpoints. Both share one connection pool.
pub struct CommandContext {
    pub config: Config,
    pub sports: SportsDbClient,
    pub predictor: PredictionClient,
}

impl CommandContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_client()?;
        let sports = SportsDbClient::new(client.clone(), config.sportsdb_base_url.clone());
        let predictor = PredictionClient::new(client, config.predictor_url.clone());

        Ok(Self {
            config,
            sports,
            predictor,
        })
    }
}
