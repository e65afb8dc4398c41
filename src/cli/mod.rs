//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{League, Season};

/// Arguments identifying a fixture.
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// League key, name, or TheSportsDB id (e.g. `epl`, `"Serie A"`, `4328`).
    #[clap(long, short)]
    pub league: League,

    /// Home team, spelled as TheSportsDB spells it.
    #[clap(long)]
    pub home: String,

    /// Away team, spelled as TheSportsDB spells it.
    #[clap(long)]
    pub away: String,

    /// Season (e.g. 2024-2025). Overrides `FOOTBALL_SEASON`.
    #[clap(long, short)]
    pub season: Option<Season>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the supported leagues.
    Leagues {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List a league's teams (falls back to an offline list when TheSportsDB is unreachable).
    Teams {
        /// League key, name, or TheSportsDB id.
        #[clap(long, short)]
        league: League,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the feature record that would be sent to the prediction service.
    ///
    /// Fails if the standings table is unusable; no placeholder is substituted.
    Features {
        #[clap(flatten)]
        fixture: MatchArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Predict a match outcome.
    ///
    /// Falls back to simulated data when statistics or the prediction
    /// service are unavailable.
    Predict {
        #[clap(flatten)]
        fixture: MatchArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Walk leagues → teams → prediction with prompts on stdin.
    Interactive {
        /// Season (e.g. 2024-2025). Overrides `FOOTBALL_SEASON`.
        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "football-predictor",
    about = "Football match predictions for top leagues"
)]
pub struct FootballPredictor {
    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
