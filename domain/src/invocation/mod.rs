//! Invocation request/response contract
//!
//! The remote function answers every request with an [`ResponseEnvelope`]
//! whose `body` is a second, separately encoded JSON document. Which shape
//! that document has depends on `statusCode`:
//!
//! - `200` → [`SuccessBody`]
//! - anything else → [`ErrorBody`](wire::ErrorBody)
//!
//! [`decode_outcome`] performs both decoding steps and collapses the result
//! into an [`InvocationOutcome`].

pub mod wire;

pub use wire::{InvocationRequest, ResponseEnvelope, SuccessBody};

use crate::core::error::{DecodeError, ResponseStage};
use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use wire::ErrorBody;

/// Status code the remote function uses for success.
pub const SUCCESS_STATUS: i64 = 200;

/// Message reported when an error body carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Decoded result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvocationOutcome {
    Success(SuccessBody),
    Failure { status_code: i64, message: String },
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success(_))
    }
}

impl ResponseEnvelope {
    /// Decode the outer envelope from a raw response payload.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let value = serde_json::from_slice(payload)
            .map_err(|e| DecodeError::malformed(ResponseStage::Envelope, e))?;
        decode_object(value, ResponseStage::Envelope)
    }

    /// Decode `body` according to `status_code`.
    ///
    /// A non-200 body that is a JSON object but lacks `error` becomes a
    /// failure with [`UNKNOWN_ERROR`]; a body that is not a JSON object is a
    /// [`DecodeError`].
    pub fn into_outcome(self) -> Result<InvocationOutcome, DecodeError> {
        let stage = if self.status_code == SUCCESS_STATUS {
            ResponseStage::SuccessBody
        } else {
            ResponseStage::ErrorBody
        };
        let value: Value =
            serde_json::from_str(&self.body).map_err(|e| DecodeError::malformed(stage, e))?;

        if self.status_code == SUCCESS_STATUS {
            let body: SuccessBody = decode_object(value, stage)?;
            Ok(InvocationOutcome::Success(body))
        } else {
            let body: ErrorBody = decode_object(value, stage)?;
            Ok(InvocationOutcome::Failure {
                status_code: self.status_code,
                message: body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            })
        }
    }
}

/// Decode `value` into `T`, accepting only JSON objects.
///
/// Derived struct deserializers also accept arrays; the wire contract does not.
fn decode_object<T: DeserializeOwned>(value: Value, stage: ResponseStage) -> Result<T, DecodeError> {
    if !value.is_object() {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        return Err(DecodeError::malformed(
            stage,
            serde_json::Error::custom(format!("expected a JSON object, found {}", found)),
        ));
    }
    serde_json::from_value(value).map_err(|e| DecodeError::malformed(stage, e))
}

/// Decode a raw response payload into an [`InvocationOutcome`].
pub fn decode_outcome(payload: &[u8]) -> Result<InvocationOutcome, DecodeError> {
    ResponseEnvelope::decode(payload)?.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(status: i64, body: &str) -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({ "statusCode": status, "body": body })).unwrap()
    }

    #[test]
    fn test_success_outcome() {
        let body = r#"{"delegation":"worker","supervisor_response":"s","worker_response":"w"}"#;
        let outcome = decode_outcome(&envelope(200, body)).unwrap();
        match outcome {
            InvocationOutcome::Success(b) => {
                assert_eq!(b.delegation, "worker");
                assert_eq!(b.supervisor_response, "s");
                assert_eq!(b.worker_response, "w");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_error_outcome_with_message() {
        let outcome = decode_outcome(&envelope(500, r#"{"error":"boom"}"#)).unwrap();
        assert_eq!(
            outcome,
            InvocationOutcome::Failure {
                status_code: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_error_outcome_defaults_to_unknown_error() {
        let outcome = decode_outcome(&envelope(500, "{}")).unwrap();
        assert_eq!(
            outcome,
            InvocationOutcome::Failure {
                status_code: 500,
                message: UNKNOWN_ERROR.to_string()
            }
        );
    }

    #[test]
    fn test_error_body_not_json_is_malformed() {
        let err = decode_outcome(&envelope(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::ErrorBody);
    }

    #[test]
    fn test_success_body_missing_field_is_malformed() {
        let body = r#"{"delegation":"worker","supervisor_response":"s"}"#;
        let err = decode_outcome(&envelope(200, body)).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::SuccessBody);
        assert!(err.to_string().contains("worker_response"));
    }

    #[test]
    fn test_envelope_missing_status_is_malformed() {
        let err = decode_outcome(br#"{"body":"{}"}"#).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::Envelope);
    }

    #[test]
    fn test_envelope_not_json_is_malformed() {
        let err = decode_outcome(b"null").unwrap_err();
        assert_eq!(err.stage(), ResponseStage::Envelope);
    }

    #[test]
    fn test_non_200_success_status_is_failure() {
        let outcome = decode_outcome(&envelope(201, r#"{"error":"created?"}"#)).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_error_body_empty_array_is_malformed() {
        let err = decode_outcome(&envelope(500, "[]")).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::ErrorBody);
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_error_body_array_with_message_is_malformed() {
        let err = decode_outcome(&envelope(500, r#"["boom"]"#)).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::ErrorBody);
    }

    #[test]
    fn test_success_body_array_is_malformed() {
        let err = decode_outcome(&envelope(200, r#"["d","s","w"]"#)).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::SuccessBody);
    }

    #[test]
    fn test_envelope_array_is_malformed() {
        let err = decode_outcome(br#"[500,"{}"]"#).unwrap_err();
        assert_eq!(err.stage(), ResponseStage::Envelope);
        assert!(err.to_string().contains("found an array"));
    }
}
