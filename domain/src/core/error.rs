//! Domain error types

use serde::Serialize;
use thiserror::Error;

/// Which layer of the response failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStage {
    /// The outer `{statusCode, body}` wrapper
    Envelope,
    /// The inner body of a 200 response
    SuccessBody,
    /// The inner body of a non-200 response
    ErrorBody,
}

impl ResponseStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStage::Envelope => "envelope",
            ResponseStage::SuccessBody => "success body",
            ResponseStage::ErrorBody => "error body",
        }
    }
}

impl std::fmt::Display for ResponseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response payload that does not match the expected wire shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed response ({stage}): {source}")]
    MalformedResponse {
        stage: ResponseStage,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn malformed(stage: ResponseStage, source: serde_json::Error) -> Self {
        DecodeError::MalformedResponse { stage, source }
    }

    /// The response layer that failed to decode
    pub fn stage(&self) -> ResponseStage {
        match self {
            DecodeError::MalformedResponse { stage, .. } => *stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_malformed_display_names_stage() {
        let error = DecodeError::malformed(ResponseStage::Envelope, json_error());
        let message = error.to_string();
        assert!(message.starts_with("Malformed response (envelope):"));
    }

    #[test]
    fn test_stage_accessor() {
        let error = DecodeError::malformed(ResponseStage::ErrorBody, json_error());
        assert_eq!(error.stage(), ResponseStage::ErrorBody);
    }
}
