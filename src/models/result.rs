use serde::{Deserialize, Serialize};

/// Summary of a finished quiz session.
///
/// Produced exactly once, when the last question leaves the reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub total_xp: u64,
    pub total_coins: u64,
    /// Whole seconds between session start and completion, floored.
    pub time_spent: u64,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total_questions > 0 {
            (self.correct_answers as f64 / self.total_questions as f64) * 100.0
        } else {
            0.0
        }
    }
}
