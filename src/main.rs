//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use football_predictor::{
    cli::{Commands, FootballPredictor},
    commands::{
        features::handle_features, interactive::handle_interactive, leagues::handle_leagues,
        predict::handle_predict, teams::handle_teams, CommandContext,
    },
    logging, Config, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let app = FootballPredictor::parse();
    logging::init(app.verbose);

    let config = Config::from_env()?;

    match app.command {
        Commands::Leagues { json } => handle_leagues(json)?,

        Commands::Teams { league, json } => {
            let ctx = CommandContext::new(config)?;
            handle_teams(&ctx, league, json).await?
        }

        Commands::Features { fixture, json } => {
            let ctx = CommandContext::new(config.with_season(fixture.season))?;
            handle_features(&ctx, fixture.league, &fixture.home, &fixture.away, json).await?
        }

        Commands::Predict { fixture, json } => {
            let ctx = CommandContext::new(config.with_season(fixture.season))?;
            handle_predict(&ctx, fixture.league, &fixture.home, &fixture.away, json).await?
        }

        Commands::Interactive { season } => {
            let ctx = CommandContext::new(config.with_season(season))?;
            handle_interactive(&ctx).await?
        }
    }

    Ok(())
}
