//! JSON wire types exchanged with the remote function

use serde::{Deserialize, Serialize};

/// Request payload: `{"user_input": "<prompt text>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub user_input: String,
}

impl InvocationRequest {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }

    /// Serialize to the UTF-8 JSON payload sent on the wire
    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Outer response wrapper: `{"statusCode": <int>, "body": "<JSON string>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    /// Separately encoded JSON document
    pub body: String,
}

/// Inner body of a 200 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub delegation: String,
    pub supervisor_response: String,
    pub worker_response: String,
}

/// Inner body of a non-200 response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
