//! Type-safe wrappers for CLI inputs.

pub mod league;
pub mod time;

pub use league::League;
pub use time::Season;
