//! Code-practice panels for Vue and Angular snippets.
//!
//! Feedback here is deliberately shallow. [`run_test_cases`] only checks that
//! each expected fragment appears verbatim in the text, and the preview is a
//! regex splice of one template block. Neither executes or validates the
//! player's code.

pub mod angular;
mod preview;
pub mod reference;
pub mod vue;

use thiserror::Error;

use crate::models::{CodingQuestion, Framework, TestCase};

pub use preview::{Preview, Previewer, Rewrite};
pub use reference::{CategoryHits, PatternCategory, PatternGroup, search};

/// Marker placed in the run output when the snippet was processed.
pub const SUCCESS_MARKER: &str = "✅";

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("invalid rewrite pattern {pattern}: {source}")]
    Pattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Outcome of a single substring check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Check each case's `input` as a literal, case-sensitive substring of `code`.
///
/// Presence of a token is all that is verified.
pub fn run_test_cases(code: &str, cases: &[TestCase]) -> Vec<TestResult> {
    cases
        .iter()
        .map(|case| {
            let passed = code.contains(case.input.as_str());
            TestResult {
                passed,
                input: case.input.clone(),
                expected: case.expected_output.clone(),
                actual: if passed { "Found" } else { "Not found" }.to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing has been run since the last reset.
    RunFirst(String),
    Graded { passed: bool, code: String },
}

pub fn starter_template(framework: Framework) -> &'static str {
    match framework {
        Framework::Vue => vue::STARTER,
        Framework::Angular => angular::STARTER,
    }
}

pub fn reference_catalog(framework: Framework) -> &'static [PatternCategory] {
    match framework {
        Framework::Vue => vue::REFERENCE,
        Framework::Angular => angular::REFERENCE,
    }
}

/// What a run reports once the component has been parsed.
pub fn run_message(framework: Framework) -> &'static str {
    match framework {
        Framework::Vue => "Vue component parsed successfully! Check the preview to see your component.",
        Framework::Angular => {
            "Angular component parsed successfully! Check the preview to see your component template."
        }
    }
}

/// Editor state for one coding question.
pub struct SnippetPanel {
    question: CodingQuestion,
    previewer: Previewer,
    code: String,
    /// Cursor position in characters.
    cursor: usize,
    output: String,
    preview: Option<Preview>,
    results: Vec<TestResult>,
    has_run: bool,
    hint_used: bool,
}

impl SnippetPanel {
    pub fn new(question: CodingQuestion) -> Result<Self, SnippetError> {
        let previewer = Previewer::new(question.framework)?;
        let code = Self::starter_for(&question);
        Ok(Self {
            cursor: code.chars().count(),
            code,
            question,
            previewer,
            output: String::new(),
            preview: None,
            results: Vec::new(),
            has_run: false,
            hint_used: false,
        })
    }

    fn starter_for(question: &CodingQuestion) -> String {
        question
            .code_template
            .clone()
            .unwrap_or_else(|| starter_template(question.framework).to_string())
    }

    pub fn question(&self) -> &CodingQuestion {
        &self.question
    }

    pub fn framework(&self) -> Framework {
        self.question.framework
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Replace the whole text, leaving the cursor at the end.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.cursor = self.code.chars().count();
    }

    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.code.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.code.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.code.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.code.chars().count());
    }

    /// Rebuild the preview and rerun the checks against the current text.
    pub fn run(&mut self) {
        self.has_run = true;
        self.results.clear();

        self.preview = Some(self.previewer.render(&self.code));
        self.output = format!("{} {}", SUCCESS_MARKER, run_message(self.framework()));

        if !self.question.test_cases.is_empty() {
            self.results = run_test_cases(&self.code, &self.question.test_cases);
        }

        tracing::debug!(
            framework = %self.framework(),
            passed = self.results.iter().filter(|r| r.passed).count(),
            total = self.results.len(),
            "snippet run"
        );
    }

    /// Grade the last run. Requires at least one run since the last reset.
    pub fn submit(&self) -> Submission {
        if !self.has_run {
            return Submission::RunFirst(format!(
                "Make sure to run your {} component first to test it!",
                self.framework()
            ));
        }

        let passed = if self.results.is_empty() {
            self.output.contains(SUCCESS_MARKER)
        } else {
            self.results.iter().all(|r| r.passed)
        };

        Submission::Graded {
            passed,
            code: self.code.clone(),
        }
    }

    /// Back to the starter text with no run, output or results.
    pub fn reset(&mut self) {
        self.set_code(Self::starter_for(&self.question));
        self.output.clear();
        self.preview = None;
        self.results.clear();
        self.has_run = false;
    }

    /// The question's hint, handed out once.
    pub fn take_hint(&mut self) -> Option<String> {
        if self.hint_used {
            return None;
        }
        let hint = self.question.hint.clone()?;
        self.hint_used = true;
        Some(hint)
    }

    pub fn reference(&self) -> &'static [PatternCategory] {
        reference_catalog(self.framework())
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.code
            .char_indices()
            .nth(chars)
            .map_or(self.code.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn question(framework: Framework, cases: Vec<TestCase>) -> CodingQuestion {
        CodingQuestion {
            id: "t".to_string(),
            framework,
            difficulty: Difficulty::Basic,
            text: "Practice".to_string(),
            code_template: None,
            expected_output: None,
            test_cases: cases,
            hint: Some("Look at the list.".to_string()),
        }
    }

    #[test]
    fn test_substring_check_is_exact() {
        let cases = [TestCase::new("v-for", "List rendering")];

        assert!(run_test_cases(r#"<li v-for="x in xs">"#, &cases)[0].passed);
        assert!(!run_test_cases("<li>", &cases)[0].passed);
        assert!(!run_test_cases("V-FOR", &cases)[0].passed);

        let padded = [TestCase::new(" v-for ", "List rendering")];
        assert!(!run_test_cases(r#"<li v-for="x">"#, &padded)[0].passed);
        assert_eq!(run_test_cases("<li>", &cases)[0].actual, "Not found");
    }

    #[test]
    fn test_submit_requires_run() {
        let panel = SnippetPanel::new(question(Framework::Vue, Vec::new())).unwrap();
        assert!(matches!(panel.submit(), Submission::RunFirst(_)));
    }

    #[test]
    fn test_submit_without_cases_uses_marker() {
        let mut panel = SnippetPanel::new(question(Framework::Angular, Vec::new())).unwrap();
        panel.run();
        assert!(panel.output().contains(SUCCESS_MARKER));
        assert!(matches!(panel.submit(), Submission::Graded { passed: true, .. }));
    }

    #[test]
    fn test_run_message_names_the_framework() {
        let mut angular = SnippetPanel::new(question(Framework::Angular, Vec::new())).unwrap();
        angular.run();
        assert_eq!(
            angular.output(),
            "✅ Angular component parsed successfully! Check the preview to see your component template."
        );

        let mut vue = SnippetPanel::new(question(Framework::Vue, Vec::new())).unwrap();
        vue.run();
        assert_eq!(
            vue.output(),
            "✅ Vue component parsed successfully! Check the preview to see your component."
        );
    }

    #[test]
    fn test_submit_is_and_of_cases() {
        let cases = vec![
            TestCase::new("v-for", "List rendering"),
            TestCase::new("v-model", "Two-way binding"),
        ];
        let mut panel = SnippetPanel::new(question(Framework::Vue, cases)).unwrap();
        panel.run();
        assert_eq!(panel.results().len(), 2);
        assert!(matches!(panel.submit(), Submission::Graded { passed: false, .. }));

        panel.insert_str("<input v-model=\"name\">");
        panel.run();
        assert!(matches!(panel.submit(), Submission::Graded { passed: true, .. }));
    }

    #[test]
    fn test_reset_restores_starter_and_clears_run() {
        let mut panel = SnippetPanel::new(question(Framework::Vue, Vec::new())).unwrap();
        panel.set_code("garbage");
        panel.run();
        assert!(!panel.preview().unwrap().is_rendered());

        panel.reset();
        assert_eq!(panel.code(), vue::STARTER);
        assert!(!panel.has_run());
        assert!(panel.output().is_empty());
        assert!(panel.preview().is_none());
        assert!(panel.results().is_empty());
        assert!(matches!(panel.submit(), Submission::RunFirst(_)));
    }

    #[test]
    fn test_editing_respects_cursor() {
        let mut q = question(Framework::Vue, Vec::new());
        q.code_template = Some("aé".to_string());
        let mut panel = SnippetPanel::new(q).unwrap();

        panel.move_left();
        panel.insert_char('x');
        assert_eq!(panel.code(), "axé");

        panel.move_right();
        panel.backspace();
        assert_eq!(panel.code(), "ax");

        panel.move_left();
        panel.move_left();
        panel.move_left();
        panel.backspace();
        assert_eq!(panel.code(), "ax");
        assert_eq!(panel.cursor(), 0);
    }

    #[test]
    fn test_hint_is_given_once() {
        let mut panel = SnippetPanel::new(question(Framework::Vue, Vec::new())).unwrap();
        assert_eq!(panel.take_hint().as_deref(), Some("Look at the list."));
        assert!(panel.hint_used());
        assert!(panel.take_hint().is_none());
    }
}
