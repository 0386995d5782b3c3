//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use smoke_domain::target::{DEFAULT_FUNCTION_NAME, DEFAULT_REGION};
use smoke_domain::{InvocationTarget, OutputFormat, Prompt, default_prompts};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use smoke_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("target.function_name cannot be empty")]
    EmptyFunctionName,

    #[error("target.region cannot be empty")]
    EmptyRegion,

    #[error("run.prompts cannot be an empty list")]
    NoPrompts,

    #[error("run.prompts[{0}] cannot be blank")]
    BlankPrompt(usize),
}

/// Raw target configuration from TOML (`[target]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTargetConfig {
    /// Lambda function name or ARN
    pub function_name: String,
    /// AWS region the function is deployed in
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
}

impl Default for FileTargetConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

impl FileTargetConfig {
    pub fn to_target(&self) -> InvocationTarget {
        InvocationTarget {
            function_name: self.function_name.clone(),
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Raw run configuration from TOML (`[run]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRunConfig {
    /// Replaces the built-in prompt list when set
    pub prompts: Option<Vec<String>>,
    /// Exit non-zero when any case does not pass
    pub fail_on_error: bool,
}

impl FileRunConfig {
    /// Configured prompts, or the built-in list
    pub fn to_prompts(&self) -> Vec<Prompt> {
        match &self.prompts {
            Some(prompts) => prompts.iter().map(|p| Prompt::from(p.as_str())).collect(),
            None => default_prompts(),
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report format (uses domain type)
    pub format: OutputFormat,
    /// Hide the in-flight spinner
    pub quiet: bool,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub target: FileTargetConfig,
    pub run: FileRunConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.target.function_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyFunctionName);
        }
        if self.target.region.trim().is_empty() {
            return Err(ConfigValidationError::EmptyRegion);
        }

        if let Some(prompts) = &self.run.prompts {
            if prompts.is_empty() {
                return Err(ConfigValidationError::NoPrompts);
            }
            if let Some(i) = prompts.iter().position(|p| Prompt::try_new(p.as_str()).is_none()) {
                return Err(ConfigValidationError::BlankPrompt(i));
            }
        }

        Ok(())
    }
}
