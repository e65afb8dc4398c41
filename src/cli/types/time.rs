//! Season identifiers as TheSportsDB spells them.

use crate::error::{PredictorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a TheSportsDB season, e.g. `2024-2025` or `2024`.
///
/// Split-year seasons must span consecutive years.
///
/// # Examples
///
/// ```rust
/// use football_predictor::Season;
///
/// let season: Season = "2024-2025".parse().unwrap();
/// assert_eq!(season.as_str(), "2024-2025");
/// assert!("2024-2026".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self("2024-2025".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_year(s: &str) -> Option<u16> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

impl FromStr for Season {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || PredictorError::InvalidSeason {
            value: s.to_string(),
        };

        match trimmed.split_once('-') {
            None => {
                parse_year(trimmed).ok_or_else(invalid)?;
            }
            Some((start, end)) => {
                let start = parse_year(start).ok_or_else(invalid)?;
                let end = parse_year(end).ok_or_else(invalid)?;
                if end != start + 1 {
                    return Err(invalid());
                }
            }
        }

        Ok(Self(trimmed.to_string()))
    }
}
