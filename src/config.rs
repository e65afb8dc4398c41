//! Runtime configuration resolved from the environment.
//!
//! Every value has a working default, so no configuration is required.
//! A `.env` file in the working directory is loaded by `main` before this
//! module reads anything.

use crate::{Result, Season};

pub const SPORTSDB_BASE_URL_ENV_VAR: &str = "SPORTSDB_BASE_URL";
pub const PREDICTOR_URL_ENV_VAR: &str = "PREDICTOR_URL";
pub const SEASON_ENV_VAR: &str = "FOOTBALL_SEASON";

/// TheSportsDB v1 JSON API with the public test key.
pub const DEFAULT_SPORTSDB_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";
pub const DEFAULT_PREDICTOR_URL: &str = "https://flask-production-c9ee.up.railway.app/api/predict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sportsdb_base_url: String,
    pub predictor_url: String,
    pub season: Season,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sportsdb_base_url: DEFAULT_SPORTSDB_BASE_URL.to_string(),
            predictor_url: DEFAULT_PREDICTOR_URL.to_string(),
            season: Season::default(),
        }
    }
}

impl Config {
    /// Read overrides from the environment. Empty values count as unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(SPORTSDB_BASE_URL_ENV_VAR) {
            config.sportsdb_base_url = url;
        }
        if let Some(url) = non_empty_var(PREDICTOR_URL_ENV_VAR) {
            config.predictor_url = url;
        }
        if let Some(season) = non_empty_var(SEASON_ENV_VAR) {
            config.season = season.parse()?;
        }

        Ok(config)
    }

    /// A season given on the command line wins over the environment.
    pub fn with_season(mut self, season: Option<Season>) -> Self {
        if let Some(season) = season {
            self.season = season;
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
