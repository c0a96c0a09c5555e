use num_bigint::BigUint;
use serde_json::{Number, Value};

use crate::core::error::AppError;

pub const KEY_FIBONACCI: &str = "fibonacci";
pub const KEY_PRIME: &str = "prime";
pub const KEY_LCM: &str = "lcm";
pub const KEY_HCF: &str = "hcf";
pub const KEY_AI: &str = "AI";

pub const EXACTLY_ONE_KEY: &str =
    "Request must contain exactly one key: fibonacci, prime, lcm, hcf, AI";
pub const INVALID_KEY: &str = "Invalid key. Use fibonacci, prime, lcm, hcf, or AI";
pub const INVALID_JSON_BODY: &str = "Request body must be a valid JSON object";

/// Integer view of a JSON number. Floats count when they have no fractional
/// part and fit in an `i64`.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(integer) = value.as_i64() {
        return Some(integer);
    }

    let float = value.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

pub fn as_positive_integer(value: &Value) -> Option<u64> {
    as_integer(value)
        .filter(|integer| *integer > 0)
        .map(|integer| integer as u64)
}

/// Exact JSON number for a big integer; relies on serde_json's
/// `arbitrary_precision` so digits beyond `u64` survive.
pub fn big_to_json(value: &BigUint) -> Result<Value, AppError> {
    value
        .to_string()
        .parse::<Number>()
        .map(Value::Number)
        .map_err(|err| AppError::internal(format!("failed to encode {value} as JSON: {err}")))
}
