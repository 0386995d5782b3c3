//! Run Smoke use case
//!
//! Sends each prompt to the remote function in order and records what came
//! back. A failure on one prompt is captured in that prompt's report and
//! never stops the rest of the run.

use crate::ports::invoker::{FunctionInvoker, InvocationError};
use crate::ports::progress::{NoProgress, RunProgressNotifier};
use smoke_domain::{
    CaseReport, CaseResult, DecodeError, InvocationOutcome, InvocationRequest, Prompt, RunSummary,
    TestCase, decode_outcome, default_prompts,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a run before any prompt is sent
#[derive(Error, Debug)]
pub enum RunSmokeError {
    #[error("No prompts configured")]
    NoPrompts,
}

/// Errors confined to a single prompt
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Input for the RunSmoke use case
#[derive(Debug, Clone)]
pub struct RunSmokeInput {
    /// Prompts to send, in run order
    pub prompts: Vec<Prompt>,
}

impl RunSmokeInput {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }
}

impl Default for RunSmokeInput {
    fn default() -> Self {
        Self::new(default_prompts())
    }
}

/// Use case for running the smoke test sequence
pub struct RunSmokeUseCase {
    invoker: Arc<dyn FunctionInvoker>,
}

impl RunSmokeUseCase {
    pub fn new(invoker: Arc<dyn FunctionInvoker>) -> Self {
        Self { invoker }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunSmokeInput) -> Result<RunSummary, RunSmokeError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSmokeInput,
        progress: &dyn RunProgressNotifier,
    ) -> Result<RunSummary, RunSmokeError> {
        if input.prompts.is_empty() {
            return Err(RunSmokeError::NoPrompts);
        }

        let target = self.invoker.target();
        let cases = TestCase::enumerate(input.prompts);
        info!(target_fn = %target, cases = cases.len(), "Starting smoke run");
        progress.on_run_start(target, cases.len());

        let mut reports = Vec::with_capacity(cases.len());
        for case in &cases {
            progress.on_case_start(case);

            let result = match self.run_case(case).await {
                Ok(outcome) => {
                    if let InvocationOutcome::Failure {
                        status_code,
                        message,
                    } = &outcome
                    {
                        warn!(case = case.index, status_code, "Case failed: {}", message);
                    }
                    CaseResult::from(outcome)
                }
                Err(e) => {
                    warn!(case = case.index, "Case errored: {}", e);
                    CaseResult::errored(e.to_string())
                }
            };

            let report = CaseReport::new(case, result);
            progress.on_case_complete(&report);
            reports.push(report);
        }

        let summary = RunSummary::new(target.function_name.clone(), reports);
        info!(
            passed = summary.counts.passed,
            failed = summary.counts.failed,
            errored = summary.counts.errored,
            "Smoke run complete"
        );
        progress.on_run_complete(&summary);

        Ok(summary)
    }

    /// Invoke the function once for `case` and decode the response.
    async fn run_case(&self, case: &TestCase) -> Result<InvocationOutcome, CaseError> {
        let payload = InvocationRequest::new(case.prompt.content())
            .to_payload()
            .map_err(CaseError::Encode)?;

        debug!(case = case.index, bytes = payload.len(), "Invoking function");
        let response = self.invoker.invoke(payload).await?;
        debug!(case = case.index, bytes = response.len(), "Received response");

        Ok(decode_outcome(&response)?)
    }
}
