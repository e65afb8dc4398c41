//! League catalog command implementation

use crate::{
    models::{output::render_leagues, LeagueSummary},
    League, Result,
};

/// Handle the leagues command
pub fn handle_leagues(as_json: bool) -> Result<()> {
    if as_json {
        let summaries: Vec<LeagueSummary> = League::ALL.into_iter().map(Into::into).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", render_leagues(&League::ALL));
    }
    Ok(())
}
