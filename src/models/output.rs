//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::{
    flow::TeamSelection,
    form::FeatureRecord,
    predict::types::{Prediction, Winner},
    teams::TeamListing,
    League,
};

use super::prediction_source::PredictionSource;

/// One catalog entry, as printed by `leagues --json`.
#[derive(Debug, Serialize)]
pub struct LeagueSummary {
    pub name: &'static str,
    pub key: &'static str,
    pub id: &'static str,
    pub logo: &'static str,
}

impl From<League> for LeagueSummary {
    fn from(league: League) -> Self {
        Self {
            name: league.name(),
            key: league.key(),
            id: league.sportsdb_id(),
            logo: league.logo(),
        }
    }
}

/// Everything the prediction screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub league: &'static str,
    pub league_key: &'static str,
    pub home_team: String,
    pub away_team: String,
    pub source: PredictionSource,
    /// Absent when aggregation failed before a record existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureRecord>,
    pub prediction: Prediction,
}

impl PredictionOutcome {
    pub fn winner_label(&self) -> &str {
        match self.prediction.winner {
            Winner::Home => &self.home_team,
            Winner::Away => &self.away_team,
            Winner::Draw => "Draw",
        }
    }
}

pub fn render_leagues(leagues: &[League]) -> String {
    let mut out = String::from("Select a League\n");
    for (i, league) in leagues.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<24} [{}]\n",
            i + 1,
            league.name(),
            league.key()
        ));
    }
    out
}

pub fn render_teams(listing: &TeamListing, selection: &TeamSelection) -> String {
    let mut out = format!("Select Teams from {}\n", listing.league);
    if let Some(reason) = &listing.fallback_reason {
        out.push_str(&format!(
            "⚠ Failed to fetch teams ({reason}); showing offline list\n"
        ));
    }

    for (i, team) in listing.teams.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}", i + 1, team.name));
        if let Some(role) = selection.role_of(team) {
            out.push_str(&format!("  <{role}>"));
        }
        if let Some(stadium) = team.stadium.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!("  ({stadium})"));
        }
        out.push('\n');
    }
    out
}

fn stat_line(label: &str, home: impl ToString, away: impl ToString) -> String {
    format!(
        "  {:<22} {:>6} {:>6}\n",
        label,
        home.to_string(),
        away.to_string()
    )
}

pub fn render_features(record: &FeatureRecord) -> String {
    [
        format!("{} vs {}\n", record.home_team, record.away_team),
        stat_line("", "Home", "Away"),
        stat_line(
            "Goals (last 5 rounds)",
            record.home_recent_goals,
            record.away_recent_goals,
        ),
        stat_line("Goals for", record.home_goals_for, record.away_goals_for),
        stat_line(
            "Goals against",
            record.home_goals_against,
            record.away_goals_against,
        ),
        stat_line(
            "Goal difference",
            record.home_goal_diff,
            record.away_goal_diff,
        ),
        stat_line("Wins", record.home_wins, record.away_wins),
        stat_line("Played", record.home_played, record.away_played),
        stat_line("Rank", record.home_rank, record.away_rank),
    ]
    .concat()
}

pub fn render_prediction(outcome: &PredictionOutcome) -> String {
    let p = &outcome.prediction;
    let mut out = format!(
        "Match Prediction: {}\n{} vs {}\n",
        outcome.league, outcome.home_team, outcome.away_team
    );

    if let PredictionSource::Placeholder { reason } = &outcome.source {
        out.push_str(&format!("⚠ {reason}\nShowing simulated data\n"));
    }

    let over_under = if p.over_under > 2.5 { "Over" } else { "Under" };
    let btts = if p.both_teams_to_score { "Yes" } else { "No" };
    let lines = [
        format!("Score Prediction:         {}", p.score),
        format!("Predicted Winner:         {}", outcome.winner_label()),
        format!(
            "Win Probability:          Home {}% | Draw {}% | Away {}%",
            p.probability.home, p.probability.draw, p.probability.away
        ),
        format!("Expected Home Goals (xG): {:.2}", p.expected_goals.home),
        format!("Expected Away Goals (xG): {:.2}", p.expected_goals.away),
        format!("Both Teams to Score:      {btts}"),
        format!("Over/Under 2.5:           {} {:.1}", over_under, p.over_under),
    ];
    for line in lines {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::build_feature_record;
    use crate::predict::types::{ExpectedGoals, Probability};
    use crate::sportsdb::types::TeamInfo;

    fn outcome(source: PredictionSource, winner: Winner) -> PredictionOutcome {
        PredictionOutcome {
            league: "English Premier League",
            league_key: "epl",
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            source,
            features: None,
            prediction: Prediction {
                score: "2-1".to_string(),
                winner,
                probability: Probability {
                    home: 55.0,
                    draw: 25.0,
                    away: 20.0,
                },
                expected_goals: ExpectedGoals {
                    home: 1.8,
                    away: 0.966,
                },
                both_teams_to_score: true,
                over_under: 2.84,
            },
        }
    }

    #[test]
    fn test_render_prediction_from_service() {
        let text = render_prediction(&outcome(PredictionSource::Service, Winner::Home));

        assert!(text.starts_with("Match Prediction: English Premier League\nArsenal vs Chelsea\n"));
        assert!(text.contains("Score Prediction:         2-1"));
        assert!(text.contains("Predicted Winner:         Arsenal"));
        assert!(text.contains("Home 55% | Draw 25% | Away 20%"));
        assert!(text.contains("Expected Home Goals (xG): 1.80"));
        assert!(text.contains("Expected Away Goals (xG): 0.97"));
        assert!(text.contains("Both Teams to Score:      Yes"));
        assert!(text.contains("Over/Under 2.5:           Over 2.8"));
        assert!(!text.contains("simulated"));
    }

    #[test]
    fn test_render_placeholder_notice() {
        let source = PredictionSource::Placeholder {
            reason: "Could not determine current round".to_string(),
        };
        let mut o = outcome(source, Winner::Draw);
        o.prediction.over_under = 2.5;

        let text = render_prediction(&o);
        assert!(text.contains("⚠ Could not determine current round"));
        assert!(text.contains("Showing simulated data"));
        assert!(text.contains("Predicted Winner:         Draw"));
        assert!(text.contains("Under 2.5"));
    }

    #[test]
    fn test_winner_label_away() {
        assert_eq!(
            outcome(PredictionSource::Service, Winner::Away).winner_label(),
            "Chelsea"
        );
    }

    #[test]
    fn test_outcome_json_skips_missing_features() {
        let value = serde_json::to_value(outcome(PredictionSource::Service, Winner::Home)).unwrap();
        assert!(value.get("features").is_none());
        assert_eq!(value["source"]["kind"], "service");
        assert_eq!(value["prediction"]["winner"], "home");
    }

    #[test]
    fn test_render_leagues() {
        let text = render_leagues(&League::ALL);
        assert!(text.contains(" 1. English Premier League"));
        assert!(text.contains("[inwi]"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_render_teams_marks_selection() {
        let listing = TeamListing {
            league: "Ligue 1",
            teams: vec![TeamInfo::named("1", "PSG"), TeamInfo::named("2", "Marseille")],
            fallback_reason: Some("TheSportsDB returned no teams".to_string()),
        };
        let mut selection = TeamSelection::default();
        selection.toggle(&listing.teams[1]);

        let text = render_teams(&listing, &selection);
        assert!(text.contains("showing offline list"));
        assert!(text.contains(" 2. Marseille  <Home>"));
        assert!(!text.contains("PSG  <"));
    }

    #[test]
    fn test_render_features() {
        let record = build_feature_record("A", "B", &[], &[]);
        let text = render_features(&record);
        assert!(text.starts_with("A vs B\n"));
        assert!(text.contains("Played"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_render_prediction_layout() {
        let text = render_prediction(&outcome(PredictionSource::Service, Winner::Home));
        let body: Vec<&str> = text.lines().skip(2).collect();

        assert_eq!(body.len(), 7);
        assert!(body.iter().all(|line| line.starts_with("  ")));
        assert_eq!(body[6], "  Over/Under 2.5:           Over 2.8");
    }

    #[test]
    fn test_render_features_columns() {
        let record = build_feature_record("A", "B", &[], &[]);
        let text = render_features(&record);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], format!("  {:<22} {:>6} {:>6}", "", "Home", "Away"));
        assert_eq!(lines[7], format!("  {:<22} {:>6} {:>6}", "Played", 1, 1));
    }

    #[test]
    fn test_league_summary() {
        let summary = LeagueSummary::from(League::LaLiga);
        assert_eq!(summary.key, "liga");
        assert_eq!(summary.id, "4335");
    }
}
