mod catalog;
mod coding;
mod question;
mod result;
mod user;

pub use catalog::{Game, GameType, Tournament, TournamentParticipant, TournamentStatus};
pub use coding::{CodingQuestion, Framework, TestCase};
pub use question::{Difficulty, Question, Subject};
pub use result::QuizResult;
pub use user::{Achievement, User, UserStats};
