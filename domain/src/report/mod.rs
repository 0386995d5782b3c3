//! Per-case reports and the run summary

use crate::invocation::{InvocationOutcome, SuccessBody};
use crate::prompt::{Prompt, TestCase};
use serde::Serialize;

/// What happened to a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseResult {
    /// statusCode 200 with a well-formed success body
    Passed(SuccessBody),
    /// Any other statusCode; `message` is the body's `error` field
    Failed { status_code: i64, message: String },
    /// The invocation failed or the response could not be decoded
    Errored { message: String },
}

impl CaseResult {
    pub fn errored(message: impl Into<String>) -> Self {
        CaseResult::Errored {
            message: message.into(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, CaseResult::Passed(_))
    }
}

impl From<InvocationOutcome> for CaseResult {
    fn from(outcome: InvocationOutcome) -> Self {
        match outcome {
            InvocationOutcome::Success(body) => CaseResult::Passed(body),
            InvocationOutcome::Failure {
                status_code,
                message,
            } => CaseResult::Failed {
                status_code,
                message,
            },
        }
    }
}

/// Report for one prompt of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub prompt: Prompt,
    #[serde(flatten)]
    pub result: CaseResult,
}

impl CaseReport {
    pub fn new(case: &TestCase, result: CaseResult) -> Self {
        Self {
            index: case.index,
            prompt: case.prompt.clone(),
            result,
        }
    }
}

/// Per-result tallies over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

/// All case reports of a run, in prompt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub target: String,
    pub counts: RunCounts,
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    pub fn new(target: impl Into<String>, cases: Vec<CaseReport>) -> Self {
        let mut counts = RunCounts {
            total: cases.len(),
            ..RunCounts::default()
        };
        for case in &cases {
            match case.result {
                CaseResult::Passed(_) => counts.passed += 1,
                CaseResult::Failed { .. } => counts.failed += 1,
                CaseResult::Errored { .. } => counts.errored += 1,
            }
        }
        Self {
            target: target.into(),
            counts,
            cases,
        }
    }

    /// True when every case passed
    pub fn all_passed(&self) -> bool {
        self.counts.passed == self.counts.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(index: usize, result: CaseResult) -> CaseReport {
        CaseReport {
            index,
            prompt: Prompt::from("p"),
            result,
        }
    }

    fn passed() -> CaseResult {
        CaseResult::Passed(SuccessBody {
            delegation: "d".to_string(),
            supervisor_response: "s".to_string(),
            worker_response: "w".to_string(),
        })
    }

    #[test]
    fn test_counts() {
        let summary = RunSummary::new(
            "fn",
            vec![
                case(1, passed()),
                case(
                    2,
                    CaseResult::Failed {
                        status_code: 500,
                        message: "boom".to_string(),
                    },
                ),
                case(3, CaseResult::errored("timeout")),
                case(4, passed()),
            ],
        );
        assert_eq!(
            summary.counts,
            RunCounts {
                total: 4,
                passed: 2,
                failed: 1,
                errored: 1
            }
        );
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_empty_summary_all_passed() {
        assert!(RunSummary::new("fn", vec![]).all_passed());
    }

    #[test]
    fn test_case_report_json_shape() {
        let json = serde_json::to_value(case(3, CaseResult::errored("timeout"))).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["prompt"], "p");
        assert_eq!(json["status"], "errored");
        assert_eq!(json["message"], "timeout");
    }

    #[test]
    fn test_outcome_conversion() {
        let result: CaseResult = InvocationOutcome::Failure {
            status_code: 404,
            message: "missing".to_string(),
        }
        .into();
        assert!(!result.is_passed());
        assert!(matches!(result, CaseResult::Failed { status_code: 404, .. }));
    }
}
