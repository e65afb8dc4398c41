use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    core::endpoint_url,
    sportsdb::{
        types::{
            EventsEnvelope, FixtureResult, StandingsEnvelope, StandingsRow, TeamInfo,
            TeamsEnvelope,
        },
        SportsDataSource,
    },
    Result, Season,
};


/// Client for TheSportsDB v1 JSON API.
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    client: Client,
    base_url: String,
}

impl SportsDbClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = endpoint_url(&self.base_url, endpoint);
        debug!(%url, ?params, "GET");

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// `lookuptable.php?l={league}&s={season}`
    pub async fn get_standings(
        &self,
        league_id: &str,
        season: &Season,
    ) -> Result<StandingsEnvelope> {
        self.get_json(
            "lookuptable.php",
            &[("l", league_id), ("s", season.as_str())],
        )
        .await
    }

    /// `eventsround.php?id={league}&r={round}&s={season}`
    pub async fn get_round_events(
        &self,
        league_id: &str,
        round: u32,
        season: &Season,
    ) -> Result<EventsEnvelope> {
        let round = round.to_string();
        self.get_json(
            "eventsround.php",
            &[("id", league_id), ("r", &round), ("s", season.as_str())],
        )
        .await
    }

    /// `search_all_teams.php?l={league name}`
    pub async fn get_teams(&self, league_name: &str) -> Result<TeamsEnvelope> {
        self.get_json("search_all_teams.php", &[("l", league_name)]).await
    }
}

#[async_trait]
impl SportsDataSource for SportsDbClient {
    async fn standings(&self, league_id: &str, season: &Season) -> Result<Vec<StandingsRow>> {
        Ok(self
            .get_standings(league_id, season)
            .await?
            .table
            .unwrap_or_default())
    }

    async fn round_fixtures(
        &self,
        league_id: &str,
        round: u32,
        season: &Season,
    ) -> Result<Vec<FixtureResult>> {
        Ok(self
            .get_round_events(league_id, round, season)
            .await?
            .events
            .unwrap_or_default())
    }

    async fn teams(&self, league_name: &str) -> Result<Vec<TeamInfo>> {
        Ok(self.get_teams(league_name).await?.teams.unwrap_or_default())
    }
}
