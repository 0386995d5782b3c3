//! Progress notification port
//!
//! Defines the interface for reporting progress during a smoke run.

use smoke_domain::{CaseReport, InvocationTarget, RunSummary, TestCase};

/// Callback for progress updates during a smoke run
///
/// Implementations live in the presentation layer. Callbacks arrive in
/// order: one `on_run_start`, then `on_case_start`/`on_case_complete`
/// per prompt, then exactly one `on_run_complete`.
pub trait RunProgressNotifier: Send + Sync {
    /// Called once before the first invocation
    fn on_run_start(&self, target: &InvocationTarget, total_cases: usize);

    /// Called before a prompt is sent
    fn on_case_start(&self, case: &TestCase);

    /// Called after a prompt's outcome is known
    fn on_case_complete(&self, report: &CaseReport);

    /// Called once after every prompt has been processed
    fn on_run_complete(&self, _summary: &RunSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgressNotifier for NoProgress {
    fn on_run_start(&self, _target: &InvocationTarget, _total_cases: usize) {}
    fn on_case_start(&self, _case: &TestCase) {}
    fn on_case_complete(&self, _report: &CaseReport) {}
}
