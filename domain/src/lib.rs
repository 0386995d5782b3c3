//! Domain layer for invoke-smoke
//!
//! This crate contains the prompts, the invocation wire types and the
//! per-case reports. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Prompt**: one line of user input sent to the remote function
//! - **Envelope**: the `{statusCode, body}` wrapper the function returns,
//!   whose `body` is itself a JSON-encoded string
//! - **Case report**: what happened to a single prompt (passed, failed with
//!   a non-200 status, or errored before a status could be read)

pub mod config;
pub mod core;
pub mod invocation;
pub mod prompt;
pub mod report;
pub mod target;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::error::{DecodeError, ResponseStage};
pub use invocation::{
    InvocationOutcome, InvocationRequest, ResponseEnvelope, SUCCESS_STATUS, SuccessBody,
    UNKNOWN_ERROR, decode_outcome,
};
pub use invocation::wire::ErrorBody;
pub use prompt::{Prompt, TestCase, default_prompts};
pub use report::{CaseReport, CaseResult, RunCounts, RunSummary};
pub use target::InvocationTarget;
pub use util::{PREVIEW_CHARS, preview, truncate_chars};
