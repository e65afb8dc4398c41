//! TheSportsDB access: wire types, the HTTP client, and the source seam the
//! form aggregator and team directory are written against.

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::{Result, Season};
use types::{FixtureResult, StandingsRow, TeamInfo};

pub use http::SportsDbClient;

/// Where standings, fixtures and team lists come from.
///
/// A missing array in the upstream response (`"table": null`) is reported
/// as an empty `Vec`; only transport and decoding problems are errors.
#[async_trait]
pub trait SportsDataSource: Send + Sync {
    /// Season standings in the order the source ranks them.
    async fn standings(&self, league_id: &str, season: &Season) -> Result<Vec<StandingsRow>>;

    /// Fixtures played in one round.
    async fn round_fixtures(
        &self,
        league_id: &str,
        round: u32,
        season: &Season,
    ) -> Result<Vec<FixtureResult>>;

    /// Clubs registered under a league's search name.
    async fn teams(&self, league_name: &str) -> Result<Vec<TeamInfo>>;
}
