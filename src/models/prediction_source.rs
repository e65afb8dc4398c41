//! Where a displayed prediction came from
//!     - Service:      the remote prediction model answered
//!     - Placeholder:  randomized stand-in after a failure

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionSource {
    Service,
    Placeholder { reason: String },
}

impl PredictionSource {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PredictionSource::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tag() {
        let source = PredictionSource::Placeholder {
            reason: "offline".to_string(),
        };
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["kind"], "placeholder");
        assert_eq!(value["reason"], "offline");

        let value = serde_json::to_value(PredictionSource::Service).unwrap();
        assert_eq!(value["kind"], "service");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(!PredictionSource::Service.is_placeholder());
        assert!(PredictionSource::Placeholder {
            reason: String::new()
        }
        .is_placeholder());
    }
}
