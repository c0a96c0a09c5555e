use serde_json::Value;

use crate::core::error::AppError;
use crate::features::bfhl::helpers::{
    EXACTLY_ONE_KEY, INVALID_KEY, KEY_AI, KEY_FIBONACCI, KEY_HCF, KEY_LCM, KEY_PRIME,
    as_integer, as_positive_integer,
};

/// A validated `/bfhl` request. Each variant corresponds to the single key
/// the body is allowed to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfhlRequest {
    Fibonacci(u64),
    /// Integer elements only; anything else in the array is dropped.
    Prime(Vec<i64>),
    Lcm(Vec<u64>),
    Hcf(Vec<u64>),
    Ai(String),
}

impl BfhlRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Fibonacci(_) => KEY_FIBONACCI,
            Self::Prime(_) => KEY_PRIME,
            Self::Lcm(_) => KEY_LCM,
            Self::Hcf(_) => KEY_HCF,
            Self::Ai(_) => KEY_AI,
        }
    }
}

impl TryFrom<Value> for BfhlRequest {
    type Error = AppError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = body else {
            return Err(AppError::bad_request(EXACTLY_ONE_KEY.to_string()));
        };
        if map.len() != 1 {
            return Err(AppError::bad_request(EXACTLY_ONE_KEY.to_string()));
        }
        let Some((key, value)) = map.into_iter().next() else {
            return Err(AppError::bad_request(EXACTLY_ONE_KEY.to_string()));
        };

        match key.as_str() {
            KEY_FIBONACCI => parse_fibonacci(&value),
            KEY_PRIME => parse_prime(&value),
            KEY_LCM => parse_positive_array(KEY_LCM, &value).map(Self::Lcm),
            KEY_HCF => parse_positive_array(KEY_HCF, &value).map(Self::Hcf),
            KEY_AI => parse_question(&value),
            _ => Err(AppError::bad_request(INVALID_KEY.to_string())),
        }
    }
}

fn parse_fibonacci(value: &Value) -> Result<BfhlRequest, AppError> {
    as_positive_integer(value)
        .map(BfhlRequest::Fibonacci)
        .ok_or_else(|| AppError::bad_request("fibonacci must be a positive integer".to_string()))
}

fn parse_prime(value: &Value) -> Result<BfhlRequest, AppError> {
    let items = non_empty_array(KEY_PRIME, value)?;
    Ok(BfhlRequest::Prime(items.iter().filter_map(as_integer).collect()))
}

fn parse_positive_array(key: &str, value: &Value) -> Result<Vec<u64>, AppError> {
    non_empty_array(key, value)?
        .iter()
        .map(as_positive_integer)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            AppError::bad_request(format!("{key} array must contain only positive integers"))
        })
}

fn parse_question(value: &Value) -> Result<BfhlRequest, AppError> {
    value
        .as_str()
        .map(str::trim)
        .filter(|question| !question.is_empty())
        .map(|question| BfhlRequest::Ai(question.to_string()))
        .ok_or_else(|| AppError::bad_request("AI must be a non-empty string".to_string()))
}

fn non_empty_array<'a>(key: &str, value: &'a Value) -> Result<&'a Vec<Value>, AppError> {
    value
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| AppError::bad_request(format!("{key} must be a non-empty array of integers")))
}
