//! Football Match Predictor Library
//!
//! Pick a league, pick two teams, and get a predicted result. Prediction is
//! delegated to a remote model; this crate gathers the statistics it needs
//! from TheSportsDB and presents what comes back.
//!
//! ## Features
//!
//! - **Form Aggregation**: current round detection and goals over the last five rounds
//! - **Season Figures**: standings-derived goals, wins, rank and games played
//! - **Prediction Client**: posts the feature record to the prediction service
//! - **Offline Fallbacks**: fixed team lists and simulated predictions when the network fails
//! - **Screen Flow**: leagues → teams → prediction as an explicit state machine
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_predictor::{
//!     core::build_client,
//!     form::{aggregate, FormRequest},
//!     sportsdb::SportsDbClient,
//!     config::DEFAULT_SPORTSDB_BASE_URL,
//!     League, Season,
//! };
//!
//! # async fn example() -> football_predictor::Result<()> {
//! let source = SportsDbClient::new(build_client()?, DEFAULT_SPORTSDB_BASE_URL);
//! let request = FormRequest {
//!     league_id: League::PremierLeague.sportsdb_id().to_string(),
//!     home_team: "Arsenal".to_string(),
//!     away_team: "Chelsea".to_string(),
//!     season: Season::default(),
//! };
//!
//! let features = aggregate(&source, &request).await?;
//! println!("{}", serde_json::to_string_pretty(&features)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SPORTSDB_BASE_URL=https://www.thesportsdb.com/api/v1/json/3
//! export PREDICTOR_URL=https://example.com/api/predict
//! export FOOTBALL_SEASON=2024-2025
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod flow;
pub mod form;
pub mod logging;
pub mod models;
pub mod predict;
pub mod sportsdb;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use cli::types::{League, Season};
pub use config::Config;
pub use error::{AggregationError, PredictorError, Result};
pub use form::FeatureRecord;
