//! Interactive session: leagues → teams → prediction over a line-based prompt.

use std::io::{BufRead, Write};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    flow::{Event, TeamSelection, View},
    models::output::{render_leagues, render_prediction, render_teams},
    predict::PredictionService,
    sportsdb::SportsDataSource,
    teams::{load_teams, TeamListing},
    League, Result, Season,
};

use super::{common::CommandContext, predict::run_prediction};

/// Print `text`, then read one trimmed line. `None` on end of input.
fn prompt<I, O>(input: &mut I, output: &mut O, text: &str) -> Result<Option<String>>
where
    I: BufRead,
    O: Write,
{
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// A 1-based catalog position or anything `League::from_str` accepts.
fn parse_league_choice(choice: &str) -> Option<League> {
    if let Ok(n) = choice.parse::<usize>() {
        if let Some(league) = n.checked_sub(1).and_then(|i| League::ALL.get(i)) {
            return Some(*league);
        }
    }
    choice.parse().ok()
}

/// Drive the screens until the user quits or input ends. Returns the view
/// the session ended on.
pub async fn run_session<S, P, I, O, R>(
    sports: &S,
    predictor: &P,
    season: &Season,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<View>
where
    S: SportsDataSource + ?Sized,
    P: PredictionService + ?Sized,
    I: BufRead,
    O: Write,
    R: Rng,
{
    let mut view = View::default();
    let mut listing: Option<TeamListing> = None;
    let mut selection = TeamSelection::default();

    'session: loop {
        match view.clone() {
            View::Leagues => {
                write!(output, "\n{}", render_leagues(&League::ALL))?;
                let Some(choice) = prompt(input, output, "League number or key (q to quit): ")?
                else {
                    break 'session;
                };

                match choice.as_str() {
                    "q" => break 'session,
                    other => match parse_league_choice(other) {
                        Some(league) => {
                            view = view.transition(Event::SelectLeague(league))?;
                            listing = None;
                            selection = TeamSelection::default();
                        }
                        None => writeln!(output, "Unknown league: {other}")?,
                    },
                }
            }

            View::Teams { league } => {
                if listing.is_none() {
                    writeln!(output, "Loading teams...")?;
                    listing = Some(load_teams(sports, league).await);
                }
                let Some(teams) = listing.as_ref() else {
                    continue;
                };

                write!(output, "\n{}", render_teams(teams, &selection))?;
                let Some(choice) = prompt(
                    input,
                    output,
                    "Team number to toggle, p to predict, b for leagues, q to quit: ",
                )?
                else {
                    break 'session;
                };

                match choice.as_str() {
                    "q" => break 'session,
                    "b" => {
                        view = view.transition(Event::BackToLeagues)?;
                        listing = None;
                        selection = TeamSelection::default();
                    }
                    "p" => match selection.clone().into_event() {
                        Some(event) => view = view.transition(event)?,
                        None => writeln!(output, "Pick a home and an away team first")?,
                    },
                    other => match teams.find(other) {
                        Some(team) => selection.toggle(team),
                        None => writeln!(output, "No team matches '{other}'")?,
                    },
                }
            }

            View::Prediction { league, home, away } => {
                writeln!(output, "Generating prediction...")?;
                let outcome =
                    run_prediction(sports, predictor, league, &home.name, &away.name, season, rng)
                        .await;
                write!(output, "\n{}", render_prediction(&outcome))?;

                loop {
                    let Some(choice) = prompt(input, output, "b to pick other teams, q to quit: ")?
                    else {
                        break 'session;
                    };
                    match choice.as_str() {
                        "q" => break 'session,
                        "b" => {
                            view = view.transition(Event::BackToTeams)?;
                            listing = None;
                            selection = TeamSelection::default();
                            break;
                        }
                        _ => continue,
                    }
                }
            }
        }
    }

    Ok(view)
}

/// Handle the interactive command on stdin/stdout
pub async fn handle_interactive(ctx: &CommandContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let mut rng = StdRng::from_entropy();

    run_session(
        &ctx.sports,
        &ctx.predictor,
        &ctx.config.season,
        &mut input,
        &mut output,
        &mut rng,
    )
    .await?;

    writeln!(output, "Goodbye!")?;
    Ok(())
}
