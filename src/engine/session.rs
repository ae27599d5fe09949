//! The quiz state machine, free of any clock or task.
//!
//! [`QuizSession`] only moves when told to: [`QuizSession::select`] for a
//! player's choice, [`QuizSession::tick`] once per elapsed second and
//! [`QuizSession::advance`] when the reveal delay is over. The driver in
//! [`super::driver`] owns the timers that make those calls.

use tokio::time::Instant;

use crate::models::{Question, QuizResult};

use super::{EngineError, EngineSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    Revealed,
    Complete,
}

/// What happened when a question was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Correct,
    Wrong,
    TimedOut,
}

impl Activity {
    /// Short text handed to the assistant.
    pub fn description(self) -> &'static str {
        match self {
            Activity::Correct => "correct",
            Activity::Wrong => "wrong",
            Activity::TimedOut => "time up - wrong",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Activity::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub correct_answer: usize,
    pub activity: Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Countdown still running, with this many seconds left.
    Running(u32),
    /// The countdown reached zero and the question was revealed unanswered.
    Expired(Reveal),
    /// Not awaiting an answer, so nothing counted down.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Complete(QuizResult),
    /// Advance requested outside the reveal state.
    Ignored,
}

pub struct QuizSession {
    questions: Vec<Question>,
    settings: EngineSettings,
    current: usize,
    remaining: u32,
    selected: Option<usize>,
    correct_answers: usize,
    phase: Phase,
    started_at: Instant,
}

impl QuizSession {
    pub fn new(
        questions: Vec<Question>,
        settings: EngineSettings,
        started_at: Instant,
    ) -> Result<Self, EngineError> {
        if questions.is_empty() {
            return Err(EngineError::EmptySequence);
        }
        if let Some(bad) = questions
            .iter()
            .find(|q| q.correct_answer >= q.options.len())
        {
            return Err(EngineError::InvalidQuestion {
                id: bad.id.clone(),
                correct_answer: bad.correct_answer,
                options: bad.options.len(),
            });
        }

        Ok(Self {
            questions,
            remaining: settings.timer_secs,
            settings,
            current: 0,
            selected: None,
            correct_answers: 0,
            phase: Phase::AwaitingAnswer,
            started_at,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == Phase::AwaitingAnswer
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Record the player's choice. Only the first choice per question counts.
    pub fn select(&mut self, answer: usize) -> Option<Reveal> {
        if self.phase != Phase::AwaitingAnswer {
            tracing::debug!(answer, phase = ?self.phase, "selection ignored");
            return None;
        }

        let correct = self.current_question().is_correct(answer);
        if correct {
            self.correct_answers += 1;
        }
        self.selected = Some(answer);
        self.phase = Phase::Revealed;

        Some(self.reveal(if correct {
            Activity::Correct
        } else {
            Activity::Wrong
        }))
    }

    /// One second has passed on the active question.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::AwaitingAnswer {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Tick::Running(self.remaining);
        }

        self.selected = None;
        self.phase = Phase::Revealed;
        Tick::Expired(self.reveal(Activity::TimedOut))
    }

    /// Leave the reveal state, either to the next question or to completion.
    pub fn advance(&mut self, now: Instant) -> Advance {
        if self.phase != Phase::Revealed {
            return Advance::Ignored;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.remaining = self.settings.timer_secs;
            self.phase = Phase::AwaitingAnswer;
            return Advance::Next(self.current);
        }

        self.phase = Phase::Complete;
        Advance::Complete(self.result(now))
    }

    fn reveal(&self, activity: Activity) -> Reveal {
        Reveal {
            question_index: self.current,
            selected: self.selected,
            correct_answer: self.current_question().correct_answer,
            activity,
        }
    }

    fn result(&self, now: Instant) -> QuizResult {
        let correct = self.correct_answers as u64;
        QuizResult {
            total_questions: self.questions.len(),
            correct_answers: self.correct_answers,
            total_xp: correct * self.settings.xp_per_correct,
            total_coins: correct * self.settings.coins_per_correct,
            time_spent: now.saturating_duration_since(self.started_at).as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::{Difficulty, Subject};

    fn question(id: &str, correct_answer: usize) -> Question {
        Question {
            id: id.to_string(),
            subject: Subject::Mathematics,
            difficulty: Difficulty::Basic,
            text: format!("Question {}", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer,
            explanation: String::new(),
            xp_reward: 50,
            coin_reward: 10,
            hint: None,
        }
    }

    fn session(correct: &[usize]) -> QuizSession {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| question(&i.to_string(), *c))
            .collect();
        QuizSession::new(questions, EngineSettings::default(), Instant::now()).unwrap()
    }

    fn play(session: &mut QuizSession, answers: &[usize]) -> QuizResult {
        for answer in answers {
            session.select(*answer);
            if let Advance::Complete(result) = session.advance(Instant::now()) {
                return result;
            }
        }
        panic!("session did not complete");
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result = QuizSession::new(Vec::new(), EngineSettings::default(), Instant::now());
        assert!(matches!(result, Err(EngineError::EmptySequence)));
    }

    #[test]
    fn test_out_of_range_correct_answer_is_rejected() {
        let result = QuizSession::new(
            vec![question("x", 7)],
            EngineSettings::default(),
            Instant::now(),
        );
        assert!(matches!(result, Err(EngineError::InvalidQuestion { .. })));
    }

    #[test]
    fn test_all_correct_scores_everything() {
        let mut s = session(&[1, 0, 2]);
        let result = play(&mut s, &[1, 0, 2]);
        assert_eq!(result.total_questions, 3);
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.total_xp, 150);
        assert_eq!(result.total_coins, 30);
    }

    #[test]
    fn test_all_wrong_scores_nothing() {
        let mut s = session(&[1, 0, 2]);
        let result = play(&mut s, &[0, 1, 0]);
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_xp, 0);
        assert_eq!(result.total_coins, 0);
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let mut s = session(&[1, 0]);
        let first = s.select(0).unwrap();
        assert_eq!(first.activity, Activity::Wrong);

        assert!(s.select(1).is_none());
        assert_eq!(s.correct_answers(), 0);
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_countdown_expires_into_reveal() {
        let mut s = session(&[2]);
        for expected in (1..30).rev() {
            assert_eq!(s.tick(), Tick::Running(expected));
        }
        let Tick::Expired(reveal) = s.tick() else {
            panic!("expected expiry on the 30th tick");
        };
        assert_eq!(reveal.selected, None);
        assert_eq!(reveal.activity, Activity::TimedOut);
        assert_eq!(s.phase(), Phase::Revealed);

        // frozen while revealed
        assert_eq!(s.tick(), Tick::Idle);
        assert!(s.select(2).is_none());
    }

    #[test]
    fn test_advance_resets_timer_and_selection() {
        let mut s = session(&[0, 1]);
        s.tick();
        s.tick();
        s.select(0);
        assert_eq!(s.advance(Instant::now()), Advance::Next(1));
        assert_eq!(s.remaining(), 30);
        assert_eq!(s.selected(), None);
        assert!(s.is_awaiting());
    }

    #[test]
    fn test_advance_outside_reveal_is_ignored() {
        let mut s = session(&[0]);
        assert_eq!(s.advance(Instant::now()), Advance::Ignored);
        s.select(0);
        assert!(matches!(s.advance(Instant::now()), Advance::Complete(_)));
        assert_eq!(s.advance(Instant::now()), Advance::Ignored);
        assert_eq!(s.phase(), Phase::Complete);
    }

    #[test]
    fn test_time_spent_is_floored() {
        let start = Instant::now();
        let mut s = QuizSession::new(vec![question("t", 0)], EngineSettings::default(), start)
            .unwrap();
        s.select(0);
        let Advance::Complete(result) = s.advance(start + Duration::from_millis(4_999)) else {
            panic!("expected completion");
        };
        assert_eq!(result.time_spent, 4);
    }

    #[test]
    fn test_custom_rewards() {
        let settings = EngineSettings {
            xp_per_correct: 7,
            coins_per_correct: 3,
            ..EngineSettings::default()
        };
        let mut s = QuizSession::new(
            vec![question("a", 0), question("b", 0)],
            settings,
            Instant::now(),
        )
        .unwrap();
        let result = play(&mut s, &[0, 0]);
        assert_eq!(result.total_xp, 14);
        assert_eq!(result.total_coins, 6);
    }
}
