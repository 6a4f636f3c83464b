//! Numeric argument coercion
//!
//! Arguments arrive as untyped JSON. Coercion follows JavaScript `Number()`:
//! null is 0, booleans are 0/1, strings are parsed after trimming (empty is 0),
//! anything else is NaN. NaN and 0 are falsy; a falsy optional argument takes
//! its default rather than failing validation.

use serde_json::{Map, Value};

use crate::error::{DiceError, Result};

use super::catalog::{DEFAULT_SIDES, MAX_COUNT, MIN_COUNT, MIN_SIDES};

/// Coerce a JSON value to a finite number. `None` stands for NaN.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().ok()? }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce and truncate a validated number to an integer.
fn truncate(n: f64) -> u64 {
    // `as` saturates for values beyond u64::MAX
    n.trunc() as u64
}

/// Read the optional `sides` argument, defaulting falsy values to 6.
pub fn sides(args: &Map<String, Value>) -> Result<u64> {
    let sides = match to_number(args.get("sides")) {
        None => DEFAULT_SIDES as f64,
        Some(n) if n == 0.0 => DEFAULT_SIDES as f64,
        Some(n) => n,
    };
    if sides < MIN_SIDES as f64 {
        return Err(DiceError::sides_too_small());
    }
    Ok(truncate(sides))
}

/// Read the required `count` argument; it has no default.
pub fn count(args: &Map<String, Value>) -> Result<u64> {
    match to_number(args.get("count")) {
        Some(n) if n >= MIN_COUNT as f64 && n <= MAX_COUNT as f64 => Ok(truncate(n)),
        _ => Err(DiceError::count_out_of_range()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{COUNT_OUT_OF_RANGE, SIDES_TOO_SMALL};
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_to_number_kinds() {
        assert_eq!(to_number(None), None);
        assert_eq!(to_number(Some(&json!(null))), Some(0.0));
        assert_eq!(to_number(Some(&json!(true))), Some(1.0));
        assert_eq!(to_number(Some(&json!(false))), Some(0.0));
        assert_eq!(to_number(Some(&json!(12))), Some(12.0));
        assert_eq!(to_number(Some(&json!(2.5))), Some(2.5));
        assert_eq!(to_number(Some(&json!(" 20 "))), Some(20.0));
        assert_eq!(to_number(Some(&json!(""))), Some(0.0));
        assert_eq!(to_number(Some(&json!("abc"))), None);
        assert_eq!(to_number(Some(&json!([6]))), None);
        assert_eq!(to_number(Some(&json!({"n": 6}))), None);
    }

    #[test]
    fn test_to_number_rejects_non_finite() {
        assert_eq!(to_number(Some(&json!("inf"))), None);
        assert_eq!(to_number(Some(&json!("NaN"))), None);
    }

    #[test]
    fn test_sides_default_when_absent() {
        assert_eq!(sides(&args(json!({}))).unwrap(), 6);
    }

    #[test]
    fn test_sides_falsy_values_default() {
        for value in [json!(0), json!(null), json!(false), json!(""), json!("d20")] {
            assert_eq!(sides(&args(json!({ "sides": value }))).unwrap(), 6);
        }
    }

    #[test]
    fn test_sides_numeric_string() {
        assert_eq!(sides(&args(json!({"sides": "20"}))).unwrap(), 20);
    }

    #[test]
    fn test_sides_too_small() {
        for value in [json!(1), json!(-4), json!(true), json!(1.5)] {
            let err = sides(&args(json!({ "sides": value }))).unwrap_err();
            assert_eq!(err.to_string(), SIDES_TOO_SMALL);
        }
    }

    #[test]
    fn test_sides_fraction_truncated() {
        assert_eq!(sides(&args(json!({"sides": 6.7}))).unwrap(), 6);
    }

    #[test]
    fn test_sides_huge_saturates() {
        assert_eq!(sides(&args(json!({"sides": 1e30}))).unwrap(), u64::MAX);
    }

    #[test]
    fn test_count_valid() {
        assert_eq!(count(&args(json!({"count": 1}))).unwrap(), 1);
        assert_eq!(count(&args(json!({"count": 100}))).unwrap(), 100);
        assert_eq!(count(&args(json!({"count": "5"}))).unwrap(), 5);
        assert_eq!(count(&args(json!({"count": 2.5}))).unwrap(), 2);
    }

    #[test]
    fn test_count_invalid() {
        for value in [json!(0), json!(-1), json!(101), json!(100.5), json!("lots"), json!(null)] {
            let err = count(&args(json!({ "count": value }))).unwrap_err();
            assert_eq!(err.to_string(), COUNT_OUT_OF_RANGE);
        }
    }

    #[test]
    fn test_count_missing() {
        let err = count(&args(json!({"sides": 6}))).unwrap_err();
        assert_eq!(err.to_string(), COUNT_OUT_OF_RANGE);
    }
}
