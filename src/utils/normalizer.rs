use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Debug;

/// Conversion between the persisted (snake_case, lowercase enum) shape of a
/// record and the display (camelCase, title-cased) shape the frontend uses.
///
/// Neither direction can fail: unknown values pass through on the way out
/// and fall back to the table default on the way back.
pub trait Normalize: Sized {
    type Display: Serialize + DeserializeOwned + Clone + PartialEq + Debug;

    fn to_display(&self) -> Self::Display;

    fn from_display(view: &Self::Display) -> Self;
}

/// Static persisted <-> display mapping for one enum-like column.
#[derive(Debug)]
pub struct LookupTable {
    keys: Vec<&'static str>,
    forward: HashMap<&'static str, String>,
    inverse: HashMap<String, &'static str>,
    fallback: &'static str,
}

impl LookupTable {
    /// Display values are the title-cased keys.
    pub fn titled(keys: &[&'static str], fallback: &'static str) -> Self {
        let pairs: Vec<(&'static str, String)> =
            keys.iter().map(|k| (*k, title_case(k))).collect();
        Self::build(pairs, fallback)
    }

    /// Display values are given explicitly.
    pub fn labelled(pairs: &[(&'static str, &'static str)], fallback: &'static str) -> Self {
        let pairs: Vec<(&'static str, String)> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        Self::build(pairs, fallback)
    }

    fn build(pairs: Vec<(&'static str, String)>, fallback: &'static str) -> Self {
        let mut keys = Vec::with_capacity(pairs.len());
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());

        for (key, label) in pairs {
            keys.push(key);
            inverse.insert(label.clone(), key);
            forward.insert(key, label);
        }

        Self {
            keys,
            forward,
            inverse,
            fallback,
        }
    }

    /// Persisted value -> display label. Unknown values are returned as-is.
    pub fn display(&self, persisted: &str) -> String {
        self.forward
            .get(persisted)
            .cloned()
            .unwrap_or_else(|| persisted.to_string())
    }

    /// Display label -> persisted value. Unknown labels map to the fallback.
    pub fn persisted(&self, display: &str) -> String {
        self.inverse
            .get(display)
            .copied()
            .unwrap_or(self.fallback)
            .to_string()
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// `needs_improvement` -> `Needs Improvement`
pub fn title_case(value: &str) -> String {
    value
        .split(['_', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parses a money/count string. Anything non-numeric (or non-finite) is 0.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Reads a calendar date from `YYYY-MM-DD` or a full timestamp.
pub fn read_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc().date());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// serde helpers for loosely typed input (decimals as strings, dates as
/// timestamps, nulls where numbers are expected).
pub mod lenient {
    use super::{parse_amount, read_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
            Some(Value::String(s)) => parse_amount(&s),
            _ => 0.0,
        })
    }

    pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => read_date(&s),
            _ => None,
        })
    }
}
