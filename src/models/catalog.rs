//! Display-only records for the lobby: games and tournaments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Difficulty, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Quiz,
    Puzzle,
    Challenge,
    Tournament,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub kind: GameType,
    pub min_bet: u32,
    pub max_bet: u32,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentParticipant {
    pub user_id: String,
    pub name: String,
    pub score: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub time_spent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub prize: u32,
    pub participants: Vec<TournamentParticipant>,
    pub sponsor: Option<String>,
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn is_sponsored(&self) -> bool {
        self.sponsor.is_some()
    }
}
