//! Invocation target configuration (serde-free).
//!
//! Names the remote function and where it lives. Loading from TOML or the
//! environment happens in the infrastructure layer.

/// Function name used when nothing else is configured.
pub const DEFAULT_FUNCTION_NAME: &str = "cross-account-bedrock-supervisor-CrossAccountOrchestrator";

/// Region used when nothing else is configured.
pub const DEFAULT_REGION: &str = "us-west-2";

/// The remote callable to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTarget {
    /// Function name or ARN.
    pub function_name: String,
    /// AWS region the function is deployed in.
    pub region: String,
    /// AWS profile name for credentials (default chain when `None`).
    pub profile: Option<String>,
}

impl Default for InvocationTarget {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

impl std::fmt::Display for InvocationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.function_name, self.region)
    }
}
