//! Quiz progression: the per-question countdown, answer scoring and the final
//! summary.

mod driver;
mod session;

use std::time::Duration;

use thiserror::Error;

pub use driver::{SessionEvent, SessionHandle};
pub use session::{Activity, Advance, Phase, QuizSession, Reveal, Tick};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot start a quiz without questions")]
    EmptySequence,
    #[error("question {id} marks option {correct_answer} correct but has only {options} options")]
    InvalidQuestion {
        id: String,
        correct_answer: usize,
        options: usize,
    },
}

/// Timing and reward rules for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub timer_secs: u32,
    pub reveal_delay_ms: u64,
    pub xp_per_correct: u64,
    pub coins_per_correct: u64,
}

impl EngineSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            timer_secs: 30,
            reveal_delay_ms: 2_000,
            xp_per_correct: 50,
            coins_per_correct: 10,
        }
    }
}
