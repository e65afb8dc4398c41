//! Match prediction command implementation
//!
//! The one place where failures turn into placeholder data: aggregation and
//! the prediction service both report errors as values, and this layer
//! decides to show a simulated result instead of an error screen.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{info, warn};

use crate::{
    models::{output::render_prediction, PredictionOutcome, PredictionSource},
    predict::{placeholder, PredictionService},
    sportsdb::SportsDataSource,
    League, Result, Season,
};

use super::{common::CommandContext, features::build_features};

/// Run the full prediction flow. Always produces something to show.
pub async fn run_prediction<S, P, R>(
    sports: &S,
    predictor: &P,
    league: League,
    home: &str,
    away: &str,
    season: &Season,
    rng: &mut R,
) -> PredictionOutcome
where
    S: SportsDataSource + ?Sized,
    P: PredictionService + ?Sized,
    R: Rng,
{
    let (features, result) = match build_features(sports, league, home, away, season).await {
        Ok(features) => {
            let result = predictor.predict(league.key(), &features).await;
            (Some(features), result)
        }
        Err(e) => (None, Err(e)),
    };

    let (prediction, source) = match result {
        Ok(prediction) => {
            info!(league = league.key(), home, away, "prediction received");
            (prediction, PredictionSource::Service)
        }
        Err(e) => {
            warn!(league = league.key(), home, away, error = %e, "prediction failed; using placeholder");
            (
                placeholder::generate(rng),
                PredictionSource::Placeholder {
                    reason: e.to_string(),
                },
            )
        }
    };

    PredictionOutcome {
        league: league.name(),
        league_key: league.key(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        source,
        features,
        prediction,
    }
}

/// Handle the predict command
pub async fn handle_predict(
    ctx: &CommandContext,
    league: League,
    home: &str,
    away: &str,
    as_json: bool,
) -> Result<()> {
    println!("Generating prediction...");

    let mut rng = StdRng::from_entropy();
    let outcome = run_prediction(
        &ctx.sports,
        &ctx.predictor,
        league,
        home,
        away,
        &ctx.config.season,
        &mut rng,
    )
    .await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_prediction(&outcome));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::types::{ExpectedGoals, Prediction, Probability, Winner};
    use crate::test_support::{fixture, row, FakePredictor, FakeSource};

    fn service_prediction() -> Prediction {
        Prediction {
            score: "2-0".to_string(),
            winner: Winner::Home,
            probability: Probability {
                home: 61.0,
                draw: 22.0,
                away: 17.0,
            },
            expected_goals: ExpectedGoals {
                home: 2.1,
                away: 0.7,
            },
            both_teams_to_score: false,
            over_under: 2.3,
        }
    }

    fn healthy_source() -> FakeSource {
        FakeSource::with_table(vec![row("Arsenal", 1, 3), row("Chelsea", 4, 3)])
            .round(3, vec![fixture("Arsenal", "Chelsea", 2, 2)])
            .round(2, vec![fixture("Fulham", "Arsenal", 0, 1)])
    }

    #[tokio::test]
    async fn test_service_prediction() {
        let source = healthy_source();
        let predictor = FakePredictor::answering(service_prediction());
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = run_prediction(
            &source,
            &predictor,
            League::PremierLeague,
            "Arsenal",
            "Chelsea",
            &Season::default(),
            &mut rng,
        )
        .await;

        assert_eq!(outcome.source, PredictionSource::Service);
        assert_eq!(outcome.prediction, service_prediction());

        let sent = predictor.received();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "epl");
        assert_eq!(sent[0].1.home_recent_goals, 3);
        assert_eq!(sent[0].1.away_recent_goals, 2);
        assert_eq!(outcome.features.as_ref(), Some(&sent[0].1));
    }

    #[tokio::test]
    async fn test_aggregation_failure_uses_placeholder() {
        let source = FakeSource::with_table(vec![]);
        let predictor = FakePredictor::answering(service_prediction());
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = run_prediction(
            &source,
            &predictor,
            League::LaLiga,
            "Barcelona",
            "Real Madrid",
            &Season::default(),
            &mut rng,
        )
        .await;

        match &outcome.source {
            PredictionSource::Placeholder { reason } => {
                assert_eq!(reason, "Standings table unavailable for league 4335")
            }
            other => panic!("Expected placeholder, got {other:?}"),
        }
        assert!(outcome.features.is_none());
        assert!(predictor.received().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_keeps_features() {
        let source = healthy_source();
        let predictor = FakePredictor::failing();
        let mut rng = StdRng::seed_from_u64(9);

        let outcome = run_prediction(
            &source,
            &predictor,
            League::PremierLeague,
            "Arsenal",
            "Chelsea",
            &Season::default(),
            &mut rng,
        )
        .await;

        assert!(outcome.source.is_placeholder());
        assert_eq!(outcome.features.as_ref().unwrap().home_team, "Arsenal");
        assert_eq!(predictor.received().len(), 1);
    }

    #[tokio::test]
    async fn test_placeholder_is_seeded() {
        let source = FakeSource::default();
        let predictor = FakePredictor::failing();

        let first = run_prediction(
            &source,
            &predictor,
            League::SerieA,
            "Juventus",
            "AC Milan",
            &Season::default(),
            &mut StdRng::seed_from_u64(11),
        )
        .await;
        let second = run_prediction(
            &source,
            &predictor,
            League::SerieA,
            "Juventus",
            "AC Milan",
            &Season::default(),
            &mut StdRng::seed_from_u64(11),
        )
        .await;

        assert_eq!(first.prediction, second.prediction);
    }
}
