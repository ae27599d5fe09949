use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::QuizResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    pub earned_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub games_played: u64,
    pub questions_answered: u64,
    pub correct_answers: u64,
    pub streak_record: u64,
    pub tournaments_won: u64,
    pub total_xp_earned: u64,
}

impl UserStats {
    /// Lifetime accuracy as a rounded percentage; zero before the first answer.
    pub fn accuracy(&self) -> u64 {
        if self.questions_answered == 0 {
            return 0;
        }
        ((self.correct_answers as f64 / self.questions_answered as f64) * 100.0).round() as u64
    }
}

/// The player profile shown by the lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub coins: u64,
    pub xp: u64,
    pub level: u32,
    pub achievements: Vec<Achievement>,
    pub stats: UserStats,
}

impl User {
    /// Fold a finished quiz into the profile.
    ///
    /// Coins, XP and the counting stats are added to; level, streak record,
    /// tournaments won and achievements are left untouched.
    pub fn apply_result(mut self, result: &QuizResult) -> User {
        self.coins += result.total_coins;
        self.xp += result.total_xp;
        self.stats.games_played += 1;
        self.stats.questions_answered += result.total_questions as u64;
        self.stats.correct_answers += result.correct_answers as u64;
        self.stats.total_xp_earned += result.total_xp;
        self
    }

    pub fn earned_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.earned)
    }
}
