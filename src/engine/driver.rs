//! Runs a [`QuizSession`] against real time.
//!
//! Each session lives in its own tokio task. The task owns the session, the
//! one-second countdown and the reveal delay, so no timer can act on a
//! session that has moved on. The view talks to it through [`SessionHandle`]
//! and listens on the returned event channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::models::{Question, QuizResult};

use super::session::{Advance, QuizSession, Reveal, Tick};
use super::{EngineError, EngineSettings};

/// Notifications sent from a running session to whoever started it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A question is waiting for an answer. Sent for the first question too.
    Question {
        index: usize,
        question: Question,
        remaining: u32,
    },
    /// The countdown moved.
    Tick { index: usize, remaining: u32 },
    /// The answer, or the lack of one, is shown.
    Revealed(Reveal),
    /// The session finished. Sent exactly once, and always last.
    Completed(QuizResult),
}

#[derive(Debug)]
enum Command {
    Select { question_index: usize, answer: usize },
}

/// Handle to a running session.
///
/// Dropping the handle tears the session down the same way [`close`] does.
///
/// [`close`]: SessionHandle::close
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Start a session on the current tokio runtime.
    ///
    /// Fails with [`EngineError::EmptySequence`] when `questions` is empty; no
    /// task is spawned in that case.
    pub fn start(
        questions: Vec<Question>,
        settings: &EngineSettings,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), EngineError> {
        let session = QuizSession::new(questions, settings.clone(), Instant::now())?;
        let id = Uuid::new_v4();

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        tracing::info!(
            session = %id,
            questions = session.total_questions(),
            "quiz session started"
        );

        let task = tokio::spawn(run_session(
            id,
            session,
            settings.reveal_delay(),
            command_rx,
            event_tx,
        ));

        Ok((
            Self {
                id,
                commands: command_tx,
                task,
            },
            event_rx,
        ))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Answer question `question_index`. Ignored unless that question is the
    /// current one and the session is waiting for an answer.
    pub fn select_answer(&self, question_index: usize, answer: usize) {
        let command = Command::Select {
            question_index,
            answer,
        };
        if self.commands.send(command).is_err() {
            tracing::debug!(session = %self.id, question_index, answer, "selection after session ended");
        }
    }

    /// Whether the session task has stopped, by completion or by close.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abandon the session. Pending timers are cancelled and no
    /// [`SessionEvent::Completed`] is sent.
    pub fn close(self) {
        tracing::info!(session = %self.id, "quiz session closed");
        // Drop aborts the task.
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_session(
    id: Uuid,
    mut session: QuizSession,
    reveal_delay: Duration,
    mut commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    let second = Duration::from_secs(1);
    let mut countdown = time::interval_at(Instant::now() + second, second);
    countdown.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let reveal_timer = time::sleep(reveal_delay);
    tokio::pin!(reveal_timer);
    let mut reveal_armed = false;

    let _ = events.send(question_event(&session));

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(Command::Select { question_index, answer }) = command else {
                    // Handle dropped without close; nobody is listening.
                    return;
                };
                if question_index != session.current_index() {
                    tracing::debug!(
                        session = %id,
                        question_index,
                        current = session.current_index(),
                        "selection for another question ignored"
                    );
                    continue;
                }
                if let Some(reveal) = session.select(answer) {
                    tracing::debug!(session = %id, ?reveal, "answer selected");
                    let _ = events.send(SessionEvent::Revealed(reveal));
                    reveal_timer.as_mut().reset(Instant::now() + reveal_delay);
                    reveal_armed = true;
                }
            }
            _ = countdown.tick(), if session.is_awaiting() => {
                match session.tick() {
                    Tick::Running(remaining) => {
                        let _ = events.send(SessionEvent::Tick {
                            index: session.current_index(),
                            remaining,
                        });
                    }
                    Tick::Expired(reveal) => {
                        tracing::debug!(session = %id, index = reveal.question_index, "time expired");
                        let _ = events.send(SessionEvent::Tick {
                            index: reveal.question_index,
                            remaining: 0,
                        });
                        let _ = events.send(SessionEvent::Revealed(reveal));
                        reveal_timer.as_mut().reset(Instant::now() + reveal_delay);
                        reveal_armed = true;
                    }
                    Tick::Idle => {}
                }
            }
            () = &mut reveal_timer, if reveal_armed => {
                reveal_armed = false;
                match session.advance(Instant::now()) {
                    Advance::Next(index) => {
                        tracing::debug!(session = %id, index, "next question");
                        countdown.reset();
                        let _ = events.send(question_event(&session));
                    }
                    Advance::Complete(result) => {
                        tracing::info!(
                            session = %id,
                            correct = result.correct_answers,
                            total = result.total_questions,
                            seconds = result.time_spent,
                            "quiz session complete"
                        );
                        let _ = events.send(SessionEvent::Completed(result));
                        return;
                    }
                    Advance::Ignored => {}
                }
            }
        }
    }
}

fn question_event(session: &QuizSession) -> SessionEvent {
    SessionEvent::Question {
        index: session.current_index(),
        question: session.current_question().clone(),
        remaining: session.remaining(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Activity;
    use crate::models::{Difficulty, Subject};

    fn questions(correct: &[usize]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(i, c)| Question {
                id: i.to_string(),
                subject: Subject::Physics,
                difficulty: Difficulty::Intermediate,
                text: format!("Q{}", i),
                options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
                correct_answer: *c,
                explanation: String::new(),
                xp_reward: 50,
                coin_reward: 10,
                hint: None,
            })
            .collect()
    }

    /// Answer each question as soon as it is shown, then wait for the result.
    async fn play(correct: &[usize], answers: &[usize]) -> QuizResult {
        let (handle, mut events) =
            SessionHandle::start(questions(correct), &EngineSettings::default()).unwrap();

        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::Question { index, .. } => {
                    handle.select_answer(index, answers[index])
                }
                SessionEvent::Completed(result) => return result,
                _ => {}
            }
        }
        panic!("event channel closed without a result");
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_correct() {
        let result = play(&[1, 0, 2], &[1, 0, 2]).await;
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.total_xp, 150);
        assert_eq!(result.total_coins, 30);
        // three reveal delays, no countdown time used
        assert_eq!(result.time_spent, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_wrong() {
        let result = play(&[1, 0, 2], &[0, 1, 0]).await;
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_xp, 0);
        assert_eq!(result.total_coins, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_timer_expires() {
        let (_handle, mut events) =
            SessionHandle::start(questions(&[1, 0, 2]), &EngineSettings::default()).unwrap();

        let mut reveals = Vec::new();
        let result = loop {
            match events.recv().await {
                Some(SessionEvent::Revealed(reveal)) => reveals.push(reveal),
                Some(SessionEvent::Completed(result)) => break result,
                Some(_) => {}
                None => panic!("channel closed early"),
            }
        };

        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_questions, 3);
        // 30 s countdown plus 2 s reveal, per question
        assert_eq!(result.time_spent, 96);
        assert_eq!(reveals.len(), 3);
        assert!(reveals.iter().all(|r| r.activity == Activity::TimedOut));
        assert!(events.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_selection_has_no_effect() {
        let (handle, mut events) =
            SessionHandle::start(questions(&[3]), &EngineSettings::default()).unwrap();

        handle.select_answer(0, 0);
        handle.select_answer(0, 3);
        handle.select_answer(0, 3);

        let mut reveals = 0;
        let result = loop {
            match events.recv().await {
                Some(SessionEvent::Revealed(reveal)) => {
                    reveals += 1;
                    assert_eq!(reveal.selected, Some(0));
                }
                Some(SessionEvent::Completed(result)) => break result,
                Some(_) => {}
                None => panic!("channel closed early"),
            }
        };
        assert_eq!(reveals, 1);
        assert_eq!(result.correct_answers, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_for_other_question_is_ignored() {
        let (handle, mut events) =
            SessionHandle::start(questions(&[0, 1]), &EngineSettings::default()).unwrap();

        // aimed at a question that is not on screen yet
        handle.select_answer(1, 1);
        handle.select_answer(0, 0);

        let mut reveals = Vec::new();
        let result = loop {
            match events.recv().await {
                Some(SessionEvent::Revealed(reveal)) => reveals.push(reveal),
                Some(SessionEvent::Completed(result)) => break result,
                Some(_) => {}
                None => panic!("channel closed early"),
            }
        };

        assert_eq!(reveals.len(), 2);
        assert_eq!(reveals[0].selected, Some(0));
        assert_eq!(reveals[0].activity, Activity::Correct);
        assert_eq!(reveals[1].question_index, 1);
        assert_eq!(reveals[1].activity, Activity::TimedOut);
        assert_eq!(result.correct_answers, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_reports_every_second() {
        let (_handle, mut events) =
            SessionHandle::start(questions(&[0]), &EngineSettings::default()).unwrap();

        assert!(matches!(
            events.recv().await,
            Some(SessionEvent::Question { index: 0, remaining: 30, .. })
        ));
        assert_eq!(
            events.recv().await,
            Some(SessionEvent::Tick { index: 0, remaining: 29 })
        );
        assert_eq!(
            events.recv().await,
            Some(SessionEvent::Tick { index: 0, remaining: 28 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_never_completes() {
        let (handle, mut events) =
            SessionHandle::start(questions(&[0, 1]), &EngineSettings::default()).unwrap();

        handle.select_answer(0, 0);
        time::sleep(Duration::from_millis(500)).await;
        handle.close();

        time::sleep(Duration::from_secs(600)).await;
        let mut drained = Vec::new();
        while let Some(event) = events.recv().await {
            drained.push(event);
        }
        assert!(
            !drained
                .iter()
                .any(|e| matches!(e, SessionEvent::Completed(_)))
        );
        // nothing past the reveal of the first question
        assert!(
            !drained
                .iter()
                .any(|e| matches!(e, SessionEvent::Question { index: 1, .. }))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_sequence_has_no_handle() {
        let result = SessionHandle::start(Vec::new(), &EngineSettings::default());
        assert!(matches!(result, Err(EngineError::EmptySequence)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_after_completion_is_harmless() {
        let (handle, mut events) =
            SessionHandle::start(questions(&[0]), &EngineSettings::default()).unwrap();
        handle.select_answer(0, 0);
        while let Some(event) = events.recv().await {
            if matches!(event, SessionEvent::Completed(_)) {
                break;
            }
        }
        assert!(events.recv().await.is_none());
        handle.select_answer(0, 1);
        assert!(handle.is_finished());
    }
}
