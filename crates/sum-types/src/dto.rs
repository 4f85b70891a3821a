//! Request and response DTOs for the sum endpoint.

use serde::{Deserialize, Serialize};

/// Validation message shared by every failure kind. Callers are not told
/// which field or which reason failed.
pub const INVALID_INTEGERS_MSG: &str = "Please provide valid integers for num1 and num2";

/// Sum request body.
///
/// Both fields are captured as raw JSON values so that missing keys, nulls,
/// and wrong-typed values all reach [`crate::coerce_int`] instead of being
/// rejected by serde with a different error shape.
#[derive(Debug, Clone, Deserialize)]
pub struct SumRequest {
    #[serde(default)]
    pub int_1: Option<serde_json::Value>,
    #[serde(default)]
    pub int_2: Option<serde_json::Value>,
}

/// Success body. The sum is widened to i128 so any two i64 inputs are
/// representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumResponse {
    pub sum: i128,
}

/// Error body for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// The one validation error this API emits.
    pub fn invalid_integers() -> Self {
        Self {
            error: INVALID_INTEGERS_MSG.to_string(),
        }
    }
}
