use crate::models::{Framework, QuizResult, User};

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Lobby,
    Quiz,
    Summary,
    Snippet(Framework),
}

/// Application state container. The profile changes only through
/// [`AppState::record_result`].
#[derive(Debug, Clone)]
pub struct AppState {
    user: User,
    pub view: View,
}

impl AppState {
    pub fn new(user: User) -> Self {
        Self {
            user,
            view: View::Lobby,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn record_result(&mut self, result: &QuizResult) {
        self.user = self.user.clone().apply_result(result);
        tracing::info!(
            user = %self.user.id,
            correct = result.correct_answers,
            total = result.total_questions,
            coins = self.user.coins,
            xp = self.user.xp,
            "quiz result recorded"
        );
    }
}
