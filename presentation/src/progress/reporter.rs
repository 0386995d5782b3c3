//! Live progress reporting for smoke runs

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use smoke_application::RunProgressNotifier;
use smoke_domain::{CaseReport, InvocationTarget, RunSummary, TestCase};
use std::io::{Stdout, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Writes the text report as the run progresses
///
/// Each prompt's heading is written before it is sent and its outcome as
/// soon as it is known. While an invocation is in flight a spinner is drawn
/// on stderr unless disabled. The pass/fail tally is opt-in; by default the
/// report ends with the completion banner.
pub struct ConsoleReporter<W: Write + Send = Stdout> {
    out: Mutex<W>,
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
    show_counts: bool,
}

impl ConsoleReporter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            spinner: Mutex::new(None),
            show_spinner: true,
            show_counts: false,
        }
    }

    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Write the `N passed, M failed, K errored` line before the banner
    pub fn with_counts(mut self, show: bool) -> Self {
        self.show_counts = show;
        self
    }

    /// Consume the reporter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl<W: Write + Send> RunProgressNotifier for ConsoleReporter<W> {
    fn on_run_start(&self, target: &InvocationTarget, _total_cases: usize) {
        self.write_line(&ConsoleFormatter::header(target));
    }

    fn on_case_start(&self, case: &TestCase) {
        self.write_line(&ConsoleFormatter::case_header(case));

        if self.show_spinner {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message(format!("Invoking (test {})...", case.index));
            pb.enable_steady_tick(Duration::from_millis(100));
            *self.spinner.lock().unwrap() = Some(pb);
        }
    }

    fn on_case_complete(&self, report: &CaseReport) {
        self.stop_spinner();
        self.write_line(&ConsoleFormatter::case_result(report));
    }

    fn on_run_complete(&self, summary: &RunSummary) {
        self.stop_spinner();
        if self.show_counts {
            self.write_line(&ConsoleFormatter::counts(&summary.counts));
        }
        self.write_line(&ConsoleFormatter::footer());
    }
}

/// Spinner-only progress for machine-readable output modes
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgressNotifier for SpinnerProgress {
    fn on_run_start(&self, _target: &InvocationTarget, _total_cases: usize) {}

    fn on_case_start(&self, case: &TestCase) {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Invoking (test {})...", case.index));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_case_complete(&self, _report: &CaseReport) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoke_domain::{CaseResult, Prompt};

    fn reporter() -> ConsoleReporter<Vec<u8>> {
        ConsoleReporter::with_writer(Vec::new()).with_spinner(false)
    }

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_writes_case_heading_before_result() {
        let reporter = reporter();
        let case = TestCase {
            index: 1,
            prompt: Prompt::from("Tell me how to learn Python"),
        };

        reporter.on_case_start(&case);
        reporter.on_case_complete(&CaseReport::new(&case, CaseResult::errored("offline")));

        let text = output(reporter);
        let heading = text.find("Test 1: Tell me how to learn Python").unwrap();
        let result = text.find("offline").unwrap();
        assert!(heading < result);
    }

    #[test]
    fn test_run_complete_writes_footer_once() {
        let reporter = reporter();
        reporter.on_run_start(&InvocationTarget::default(), 0);
        reporter.on_run_complete(&RunSummary::new("fn", vec![]));

        let text = output(reporter);
        assert!(text.contains("Testing Cross-Account Bedrock Agent Memory Sharing"));
        assert_eq!(text.matches("Testing complete!").count(), 1);
    }

    #[test]
    fn test_counts_written_only_when_enabled() {
        let case = TestCase {
            index: 1,
            prompt: Prompt::from("p"),
        };
        let summary = RunSummary::new(
            "fn",
            vec![CaseReport::new(&case, CaseResult::errored("offline"))],
        );

        let plain = reporter();
        plain.on_run_complete(&summary);
        assert!(!output(plain).contains("errored"));

        let tallied = reporter().with_counts(true);
        tallied.on_run_complete(&summary);
        let text = output(tallied);
        let counts = text.find("errored").unwrap();
        let banner = text.find("Testing complete!").unwrap();
        assert!(counts < banner);
    }

    // -- End-to-end with the run use case --------------------------------------

    mod run {
        use super::*;
        use async_trait::async_trait;
        use smoke_application::{
            FunctionInvoker, InvocationError, RunSmokeInput, RunSmokeUseCase,
        };
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        /// Answers by call number: 1 succeeds, 2 drops the connection,
        /// 3 returns an error body, 4 returns an empty error body.
        struct FlakyInvoker {
            target: InvocationTarget,
            calls: AtomicUsize,
        }

        #[async_trait]
        impl FunctionInvoker for FlakyInvoker {
            fn target(&self) -> &InvocationTarget {
                &self.target
            }

            async fn invoke(&self, _payload: Vec<u8>) -> Result<Vec<u8>, InvocationError> {
                let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
                let envelope = match n {
                    1 => {
                        let body = serde_json::json!({
                            "delegation": "learning-coach",
                            "supervisor_response": "s".repeat(120),
                            "worker_response": "Start with the official tutorial",
                        });
                        serde_json::json!({ "statusCode": 200, "body": body.to_string() })
                    }
                    2 => {
                        return Err(InvocationError::ConnectionError(
                            "connection reset".to_string(),
                        ));
                    }
                    3 => serde_json::json!({ "statusCode": 500, "body": r#"{"error":"boom"}"# }),
                    _ => serde_json::json!({ "statusCode": 500, "body": "{}" }),
                };
                Ok(serde_json::to_vec(&envelope).unwrap())
            }
        }

        #[tokio::test]
        async fn test_full_run_report() {
            let invoker = Arc::new(FlakyInvoker {
                target: InvocationTarget::default(),
                calls: AtomicUsize::new(0),
            });
            let use_case = RunSmokeUseCase::new(invoker.clone());
            let reporter = reporter();

            let summary = use_case
                .execute_with_progress(RunSmokeInput::default(), &reporter)
                .await
                .unwrap();
            let text = output(reporter);

            assert_eq!(invoker.calls.load(Ordering::SeqCst), 4);
            for i in 1..=4 {
                assert!(text.contains(&format!("Test {}:", i)));
            }
            assert!(text.contains("Delegation: learning-coach"));
            assert!(text.contains(&format!("{}...", "s".repeat(100))));
            assert!(!text.contains(&"s".repeat(101)));
            assert!(text.contains("connection reset"));
            assert!(text.contains("boom"));
            assert!(text.contains("Unknown error"));
            assert_eq!(text.matches("Testing complete!").count(), 1);
            assert!(text.trim_end().ends_with("Testing complete!"));
            assert!(!text.contains("passed,"));
            assert_eq!(summary.counts.passed, 1);
            assert_eq!(summary.counts.errored, 1);
            assert_eq!(summary.counts.failed, 2);
        }
    }
}
