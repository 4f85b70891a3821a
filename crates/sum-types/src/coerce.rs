//! Permissive integer coercion for request values.

use serde_json::Value;

// 2^63. Exactly representable in f64 (i64::MAX is not; it rounds up to this),
// so the float branch uses an exclusive upper bound.
const I64_RANGE_END: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    #[error("value is missing or null")]
    Missing,
    #[error("value is not an integer")]
    NotAnInteger,
}

/// Coerce a raw JSON value to an i64.
///
/// Accepts JSON integers, floats with a zero fractional part inside the i64
/// range, and strings that parse as an integer literal after trimming.
/// Rejects everything else: fractional floats, non-numeric strings, bools,
/// arrays, objects, null, and absent values.
pub fn coerce_int(value: Option<&Value>) -> Result<i64, CoerceError> {
    match value.ok_or(CoerceError::Missing)? {
        Value::Null => Err(CoerceError::Missing),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= -I64_RANGE_END && f < I64_RANGE_END => {
                    Ok(f as i64)
                }
                _ => Err(CoerceError::NotAnInteger),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoerceError::NotAnInteger),
        _ => Err(CoerceError::NotAnInteger),
    }
}
