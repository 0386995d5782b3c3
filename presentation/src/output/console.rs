//! Console output formatter for smoke runs

use colored::Colorize;
use smoke_domain::{
    CaseReport, CaseResult, InvocationTarget, RunCounts, RunSummary, TestCase, preview,
};

const TITLE: &str = "🧪 Testing Cross-Account Bedrock Agent Memory Sharing";

/// Formats smoke-run progress and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed once before the first prompt
    pub fn header(target: &InvocationTarget) -> String {
        format!(
            "{}\n{}\n{} {}",
            TITLE.bold(),
            "=".repeat(60),
            "Target:".cyan(),
            target
        )
    }

    /// Heading printed before each prompt is sent
    pub fn case_header(case: &TestCase) -> String {
        format!(
            "\n🔍 Test {}: {}\n{}",
            case.index,
            case.prompt,
            "-".repeat(40)
        )
    }

    /// Outcome lines for one prompt
    pub fn case_result(report: &CaseReport) -> String {
        match &report.result {
            CaseResult::Passed(body) => format!(
                "{} - Delegation: {}\n📝 Supervisor: {}\n🔧 Worker: {}",
                "✅ Success".green(),
                body.delegation,
                preview(&body.supervisor_response),
                preview(&body.worker_response)
            ),
            CaseResult::Failed {
                status_code,
                message,
            } => format!(
                "{} {} {}",
                "❌ Error:".red(),
                message,
                format!("(status {})", status_code).dimmed()
            ),
            CaseResult::Errored { message } => format!("{} {}", "❌ Exception:".red(), message),
        }
    }

    /// Tally line printed before the completion banner
    pub fn counts(counts: &RunCounts) -> String {
        format!(
            "\n{} passed, {} failed, {} errored",
            counts.passed.to_string().green(),
            counts.failed.to_string().red(),
            counts.errored.to_string().yellow()
        )
    }

    /// Completion banner, printed exactly once per run
    pub fn footer() -> String {
        "\n🎉 Testing complete!".to_string()
    }

    /// Format as JSON
    pub fn format_json(summary: &RunSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }
}
