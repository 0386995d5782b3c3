//! Function invoker port
//!
//! Defines the interface for calling the remote function under test.

use async_trait::async_trait;
use smoke_domain::InvocationTarget;
use thiserror::Error;

/// Errors that can occur while invoking the remote function
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    /// The function itself raised and the runtime reported it
    #[error("Function error ({kind}): {message}")]
    FunctionError { kind: String, message: String },

    #[error("Empty response payload")]
    EmptyPayload,

    #[error("Other error: {0}")]
    Other(String),
}

/// Invoker bound to a single remote function
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    /// The function this invoker calls
    fn target(&self) -> &InvocationTarget;

    /// Send a JSON payload and wait for the raw response payload
    async fn invoke(&self, payload: Vec<u8>) -> Result<Vec<u8>, InvocationError>;
}
