//! Prompt value objects and the default test list

use serde::{Deserialize, Serialize};

/// Prompts sent when no override is configured, in run order.
pub const DEFAULT_PROMPTS: [&str; 4] = [
    "Tell me how to learn Python",
    "Help me plan a birthday party",
    "What's the best way to start a business?",
    "How do I improve my public speaking skills?",
];

/// A single line of user input sent to the remote function (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create a prompt, returning None if the content is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::new(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::new(s)
    }
}

/// A prompt together with its 1-based position in the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub index: usize,
    pub prompt: Prompt,
}

impl TestCase {
    /// Number prompts starting at 1, preserving order
    pub fn enumerate(prompts: impl IntoIterator<Item = Prompt>) -> Vec<TestCase> {
        prompts
            .into_iter()
            .enumerate()
            .map(|(i, prompt)| TestCase {
                index: i + 1,
                prompt,
            })
            .collect()
    }
}

/// The fixed default prompt list
pub fn default_prompts() -> Vec<Prompt> {
    DEFAULT_PROMPTS.iter().map(|p| Prompt::from(*p)).collect()
}
