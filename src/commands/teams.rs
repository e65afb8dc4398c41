//! Team listing command implementation

use crate::{
    flow::TeamSelection, models::output::render_teams, teams::load_teams, League, Result,
};

use super::common::CommandContext;

/// Handle the teams command
///
/// Never fails on network errors: the offline list is printed instead.
pub async fn handle_teams(ctx: &CommandContext, league: League, as_json: bool) -> Result<()> {
    let listing = load_teams(&ctx.sports, league).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", render_teams(&listing, &TeamSelection::default()));
    }
    Ok(())
}
