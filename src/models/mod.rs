//! Presentation models shared by the commands.

pub mod output;
pub mod prediction_source;

pub use output::{LeagueSummary, PredictionOutcome};
pub use prediction_source::PredictionSource;
