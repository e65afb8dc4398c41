//! Serde helpers for loosely typed JSON.
//!
//! TheSportsDB sends every number as a string (`"intPlayed": "12"`) and uses
//! `null` or `""` for unknowns; the prediction service mixes numbers and
//! numeric strings. These helpers accept either form and turn anything
//! unparseable into `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserialize an integer that may arrive as a number, a numeric string, or not at all.
pub fn de_lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(int_from_value))
}

/// Deserialize a float that may arrive as a number or a numeric string.
pub fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(f64_from_value))
}

/// Like [`de_lenient_f64`] but falls back to `0.0`.
pub fn de_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_f64(deserializer)?.unwrap_or(0.0))
}

/// Deserialize a string field that may be `null`.
pub fn de_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn int_from_value<T>(value: &Value) -> Option<T>
where
    T: FromStr + TryFrom<i64>,
{
    match value {
        Value::Number(n) => {
            let whole = n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?;
            T::try_from(whole).ok()
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<T>().ok().or_else(|| {
                // "3.0" style strings
                let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
                T::try_from(f.trunc() as i64).ok()
            })
        }
        _ => None,
    }
}

fn f64_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "de_lenient_int")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "de_lenient_int")]
        diff: Option<i32>,
        #[serde(default, deserialize_with = "de_lenient_f64")]
        ratio: Option<f64>,
        #[serde(default, deserialize_with = "de_string_or_empty")]
        name: String,
    }

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_strings() {
        let r = row(json!({"count": "12", "diff": "-4", "ratio": "1.75", "name": "Arsenal"}));
        assert_eq!(r.count, Some(12));
        assert_eq!(r.diff, Some(-4));
        assert_eq!(r.ratio, Some(1.75));
        assert_eq!(r.name, "Arsenal");
    }

    #[test]
    fn test_plain_numbers() {
        let r = row(json!({"count": 7, "diff": 3, "ratio": 2}));
        assert_eq!(r.count, Some(7));
        assert_eq!(r.diff, Some(3));
        assert_eq!(r.ratio, Some(2.0));
    }

    #[test]
    fn test_missing_null_and_garbage() {
        let r = row(json!({"count": null, "diff": "n/a", "ratio": "", "name": null}));
        assert_eq!(r.count, None);
        assert_eq!(r.diff, None);
        assert_eq!(r.ratio, None);
        assert_eq!(r.name, "");

        let r = row(json!({}));
        assert_eq!(r.count, None);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let r = row(json!({"count": "-2"}));
        assert_eq!(r.count, None);
    }

    #[test]
    fn test_float_strings_truncate() {
        let r = row(json!({"count": "3.0", "diff": 2.9}));
        assert_eq!(r.count, Some(3));
        assert_eq!(r.diff, Some(2));
    }
}
