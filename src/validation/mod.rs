//! Request input helpers.
//!
//! Field rules (lengths, ranges, patterns) live on the input structs as
//! `validator` attributes. This module holds what sits in front of them:
//! lenient deserializers that coerce loosely typed JSON the way a schema
//! validator with type coercion would, and path id parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ApiError;

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid id regex"));

/// `#RRGGBB`
pub static HEX_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex code regex"));

/// VIN alphabet: digits and capitals except I, O, Q
pub static VIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("valid vin regex"));

// Accepts integral numbers (including `3.0`) and numeric strings
pub fn deserialize_loose_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let n = n.ok_or_else(|| D::Error::custom(format!("expected an integer, found {}", value)))?;
    i32::try_from(n).map_err(|_| D::Error::custom(format!("integer out of range: {}", n)))
}

// Accepts strings and stringifies other scalars
pub fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a string, found {}", other))),
    }
}

/// Validate a path id. `Ok(None)` means the id is well-formed but cannot
/// name a stored row (it overflows the id column).
pub fn parse_id(raw: &str) -> Result<Option<i32>, ApiError> {
    if !ID_PATTERN.is_match(raw) {
        let mut field_errors = BTreeMap::new();
        field_errors.insert("id".to_string(), "must be a non-negative integer".to_string());
        return Err(ApiError::validation_error("Request validation failed", field_errors));
    }
    Ok(raw.parse::<i32>().ok())
}
