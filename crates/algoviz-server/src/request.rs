//! Wire format and validation for `/api/steps` requests.

use algoviz_steps::{AlgorithmId, RunOptions, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Smallest accepted array.
pub const MIN_ARRAY_LEN: usize = 5;

/// Largest accepted array.
pub const MAX_ARRAY_LEN: usize = 256;

/// Request body as it arrives, before validation.
#[derive(Debug, Deserialize)]
struct WireRequest {
    algorithm: String,
    #[serde(default)]
    array: Value,
    #[serde(default)]
    options: Option<WireOptions>,
}

#[derive(Debug, Default, Deserialize)]
struct WireOptions {
    #[serde(default)]
    target: Option<Value>,
    #[serde(default)]
    order: Option<String>,
}

/// A validated request, ready for the remote delegate or the local engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub algorithm: AlgorithmId,
    pub array: Vec<i64>,
    pub options: RunOptions,
}

impl Job {
    /// Parse and validate a raw request body.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let wire: WireRequest = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: WireRequest) -> Result<Self, ApiError> {
        let elements = match &wire.array {
            Value::Array(items) if (MIN_ARRAY_LEN..=MAX_ARRAY_LEN).contains(&items.len()) => items,
            _ => {
                return Err(ApiError::InvalidInput(format!(
                    "Array length must be {MIN_ARRAY_LEN}..{MAX_ARRAY_LEN}"
                )))
            }
        };
        let array = elements
            .iter()
            .map(as_integer)
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| ApiError::InvalidInput("Array must contain integers".into()))?;

        let algorithm = wire.algorithm.parse::<AlgorithmId>()?;

        let options = wire.options.unwrap_or_default();
        let order = match options.order.as_deref() {
            Some(order) => order.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };
        let target = match options.target {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                as_integer(&value)
                    .ok_or_else(|| ApiError::InvalidInput("Target must be an integer".into()))?,
            ),
        };

        Ok(Job {
            algorithm,
            array,
            options: RunOptions { target, order },
        })
    }

    /// The array the engine should see.
    ///
    /// Binary and jump search need ascending input, so those jobs get a
    /// sorted copy; everything else runs on the array as given.
    pub fn engine_input(&self) -> Vec<i64> {
        let mut input = self.array.clone();
        if self.algorithm.requires_sorted_input() {
            input.sort_unstable();
        }
        input
    }
}

/// Accept JSON integers, including floats with no fractional part.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Job, ApiError> {
        Job::from_body(body.as_bytes())
    }

    #[test]
    fn accepts_minimal_request() {
        let job = parse(r#"{"algorithm": "bubble", "array": [5, 3, 1, 4, 2]}"#).unwrap();
        assert_eq!(job.algorithm, AlgorithmId::Bubble);
        assert_eq!(job.array, vec![5, 3, 1, 4, 2]);
        assert_eq!(job.options, RunOptions::default());
    }

    #[test]
    fn reads_options() {
        let job = parse(
            r#"{"algorithm": "quick", "array": [1, 2, 3, 4, 5], "options": {"order": "desc", "target": 4}}"#,
        )
        .unwrap();
        assert_eq!(job.options.order, SortOrder::Descending);
        assert_eq!(job.options.target, Some(4));
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(parse("{not json").unwrap_err(), ApiError::InvalidJson);
        assert_eq!(parse(r#"{"array": [1,2,3,4,5]}"#).unwrap_err(), ApiError::InvalidJson);
    }

    #[test]
    fn rejects_bad_lengths() {
        let short = parse(r#"{"algorithm": "bubble", "array": [1, 2, 3, 4]}"#).unwrap_err();
        assert_eq!(short.to_string(), "Array length must be 5..256");

        let long = format!(
            r#"{{"algorithm": "bubble", "array": {:?}}}"#,
            vec![1; MAX_ARRAY_LEN + 1]
        );
        assert!(matches!(parse(&long), Err(ApiError::InvalidInput(_))));

        let not_array = parse(r#"{"algorithm": "bubble", "array": "12345"}"#).unwrap_err();
        assert_eq!(not_array.to_string(), "Array length must be 5..256");
    }

    #[test]
    fn rejects_non_integers() {
        let err = parse(r#"{"algorithm": "bubble", "array": [1, 2.5, 3, 4, 5]}"#).unwrap_err();
        assert_eq!(err.to_string(), "Array must contain integers");

        let err = parse(r#"{"algorithm": "bubble", "array": [1, "2", 3, 4, 5]}"#).unwrap_err();
        assert_eq!(err.to_string(), "Array must contain integers");
    }

    #[test]
    fn integral_floats_are_integers() {
        let job = parse(r#"{"algorithm": "merge", "array": [1.0, 2, 3, 4, 5]}"#).unwrap();
        assert_eq!(job.array[0], 1);
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let err = parse(r#"{"algorithm": "bogo", "array": [1, 2, 3, 4, 5]}"#).unwrap_err();
        assert_eq!(err, ApiError::UnknownAlgorithm("bogo".into()));
        assert_eq!(err.to_string(), "Unknown algorithm");
    }

    #[test]
    fn rejects_unknown_order_and_bad_target() {
        let err = parse(
            r#"{"algorithm": "bubble", "array": [1, 2, 3, 4, 5], "options": {"order": "up"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = parse(
            r#"{"algorithm": "linear", "array": [1, 2, 3, 4, 5], "options": {"target": "x"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Target must be an integer");
    }

    #[test]
    fn sorted_searches_get_sorted_input() {
        let body = r#"{"algorithm": "binary", "array": [9, 1, 7, 3, 5], "options": {"target": 7}}"#;
        let job = parse(body).unwrap();
        assert_eq!(job.engine_input(), vec![1, 3, 5, 7, 9]);
        // the validated job keeps the caller's order
        assert_eq!(job.array, vec![9, 1, 7, 3, 5]);

        let body = r#"{"algorithm": "linear", "array": [9, 1, 7, 3, 5], "options": {"target": 7}}"#;
        assert_eq!(parse(body).unwrap().engine_input(), vec![9, 1, 7, 3, 5]);
    }
}
