//! Lambda invoker adapter
//!
//! Implements `FunctionInvoker` on top of the AWS Lambda `Invoke` API.
//! Handles AWS credential initialization and client creation.

use super::types;
use async_trait::async_trait;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::types::InvocationType;
use aws_smithy_types::Blob;
use smoke_application::{FunctionInvoker, InvocationError};
use smoke_domain::InvocationTarget;
use tracing::{debug, info};

pub struct LambdaInvoker {
    client: LambdaClient,
    target: InvocationTarget,
}

impl LambdaInvoker {
    /// Create a new invoker bound to `target`.
    ///
    /// Loads AWS credentials from the default chain, scoped to the target's
    /// profile when one is set.
    pub async fn new(target: InvocationTarget) -> Self {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(target.region.clone()));

        if let Some(ref profile) = target.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        info!(function = %target.function_name, region = %target.region, "Lambda client initialized");

        Self {
            client: LambdaClient::new(&aws_config),
            target,
        }
    }
}

#[async_trait]
impl FunctionInvoker for LambdaInvoker {
    fn target(&self) -> &InvocationTarget {
        &self.target
    }

    async fn invoke(&self, payload: Vec<u8>) -> Result<Vec<u8>, InvocationError> {
        debug!(
            function = %self.target.function_name,
            bytes = payload.len(),
            "Calling Lambda Invoke API"
        );

        let output = self
            .client
            .invoke()
            .function_name(&self.target.function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| types::convert_invoke_error(&e))?;

        debug!(
            status = output.status_code(),
            executed_version = output.executed_version().unwrap_or("-"),
            "Lambda responded"
        );

        types::convert_invoke_output(output)
    }
}
