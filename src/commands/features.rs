//! Feature record command implementation

use tracing::info;

use crate::{
    form::{aggregate, FeatureRecord, FormRequest},
    models::output::render_features,
    sportsdb::SportsDataSource,
    League, Result, Season,
};

use super::common::CommandContext;

/// Build the form request for a fixture in `league`.
pub fn form_request(league: League, home: &str, away: &str, season: &Season) -> FormRequest {
    FormRequest {
        league_id: league.sportsdb_id().to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        season: season.clone(),
    }
}

/// Aggregate without any fallback; errors reach the caller.
pub async fn build_features<S>(
    source: &S,
    league: League,
    home: &str,
    away: &str,
    season: &Season,
) -> Result<FeatureRecord>
where
    S: SportsDataSource + ?Sized,
{
    let request = form_request(league, home, away, season);
    Ok(aggregate(source, &request).await?)
}

/// Handle the features command
pub async fn handle_features(
    ctx: &CommandContext,
    league: League,
    home: &str,
    away: &str,
    as_json: bool,
) -> Result<()> {
    info!(league = league.key(), home, away, season = %ctx.config.season, "aggregating form");
    let record = build_features(&ctx.sports, league, home, away, &ctx.config.season).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_features(&record));
    }
    Ok(())
}
