//! Mixed number/text lists: numeric dedup and random-id tagging.
//!
//! Numbers are `f64`, so `2` and `2.0` are the same value and `3.5` is a number.

use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Finite numeric tokens become numbers, anything else is kept as text.
    pub fn parse(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(token.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display drops the fraction for integral values ("2", not "2.0").
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Set key under which `0.0 == -0.0` and all NaNs collapse to one entry.
fn dedup_key(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

/// Distinct numbers in first-occurrence order; text is dropped.
pub fn dedup_numbers(values: &[Value]) -> Vec<f64> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter_map(Value::as_number)
        .filter(|n| seen.insert(dedup_key(*n)))
        .collect()
}

/// Key every value by a fresh v4 id. Text maps to zero.
pub fn tag_with_ids(values: &[Value]) -> HashMap<Uuid, f64> {
    values
        .iter()
        .map(|v| (Uuid::new_v4(), v.as_number().unwrap_or(0.0)))
        .collect()
}
