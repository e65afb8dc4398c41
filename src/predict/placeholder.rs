//! Randomized stand-in predictions.
//!
//! Shown when the statistics or the prediction service cannot be reached, so
//! the user always lands on a result screen. The numbers carry no meaning.

use rand::Rng;

use super::types::{ExpectedGoals, Prediction, Probability, Winner};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn generate<R: Rng>(rng: &mut R) -> Prediction {
    let home_score: f64 = rng.gen_range(0.0..3.0);
    let away_score: f64 = rng.gen_range(0.0..3.0);

    let winner = if rng.gen::<f64>() > 0.6 {
        Winner::Home
    } else if rng.gen::<f64>() > 0.3 {
        Winner::Away
    } else {
        Winner::Draw
    };

    Prediction {
        score: format!("{:.1}-{:.1}", home_score, away_score),
        winner,
        probability: Probability {
            home: f64::from(rng.gen_range(30u32..70)),
            draw: f64::from(rng.gen_range(10u32..40)),
            away: f64::from(rng.gen_range(10u32..40)),
        },
        expected_goals: ExpectedGoals {
            home: round_to(rng.gen_range(0.0..3.0), 2),
            away: round_to(rng.gen_range(0.0..2.0), 2),
        },
        both_teams_to_score: rng.gen_bool(0.5),
        over_under: round_to(rng.gen_range(1.5..3.5), 1),
    }
}
