//! Conversions between AWS Lambda SDK results and port types

use aws_sdk_lambda::error::SdkError;
use aws_sdk_lambda::operation::invoke::{InvokeError, InvokeOutput};
use serde::Deserialize;
use smoke_application::InvocationError;

/// Error document the Lambda runtime returns when a handler raises.
#[derive(Debug, Default, Deserialize)]
struct RuntimeErrorPayload {
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
    #[serde(rename = "errorType", default)]
    error_type: Option<String>,
}

/// Build an [`InvocationError::FunctionError`] from the `FunctionError`
/// header value and the runtime's error payload.
pub fn function_error(kind: &str, payload: &[u8]) -> InvocationError {
    let parsed: RuntimeErrorPayload = serde_json::from_slice(payload).unwrap_or_default();
    let message = match (parsed.error_type, parsed.error_message) {
        (Some(t), Some(m)) => format!("{}: {}", t, m),
        (None, Some(m)) => m,
        (Some(t), None) => t,
        (None, None) => String::from_utf8_lossy(payload).into_owned(),
    };
    InvocationError::FunctionError {
        kind: kind.to_string(),
        message,
    }
}

/// Extract the response payload, surfacing function errors.
pub fn convert_invoke_output(output: InvokeOutput) -> Result<Vec<u8>, InvocationError> {
    let payload = output
        .payload()
        .map(|blob| blob.as_ref().to_vec())
        .unwrap_or_default();

    if let Some(kind) = output.function_error() {
        return Err(function_error(kind, &payload));
    }
    if payload.is_empty() {
        return Err(InvocationError::EmptyPayload);
    }
    Ok(payload)
}

/// Convert an SDK error into an [`InvocationError`].
pub fn convert_invoke_error<R: std::fmt::Debug>(err: &SdkError<InvokeError, R>) -> InvocationError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            InvokeError::ResourceNotFoundException(e) => {
                InvocationError::ServiceError(format!("Function not found: {}", e))
            }
            InvokeError::TooManyRequestsException(e) => {
                InvocationError::ServiceError(format!("Lambda throttled: {}", e))
            }
            InvokeError::InvalidRequestContentException(e) => {
                InvocationError::ServiceError(format!("Invalid request content: {}", e))
            }
            InvokeError::ServiceException(e) => {
                InvocationError::ServiceError(format!("Lambda service error: {}", e))
            }
            other => InvocationError::ServiceError(format!("Lambda error: {}", other)),
        },
        SdkError::TimeoutError(_) => {
            InvocationError::ConnectionError("Lambda request timed out".to_string())
        }
        other => InvocationError::ConnectionError(format!("Lambda SDK error: {}", other)),
    }
}
