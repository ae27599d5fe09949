use std::fmt;

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Front-end framework a practice snippet is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Vue,
    Angular,
}

impl Framework {
    pub fn name(self) -> &'static str {
        match self {
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fragment that must appear in the snippet, and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingQuestion {
    pub id: String,
    pub framework: Framework,
    pub difficulty: Difficulty,
    pub text: String,
    /// Starting text; the framework's stock component when absent.
    pub code_template: Option<String>,
    pub expected_output: Option<String>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    pub hint: Option<String>,
}
