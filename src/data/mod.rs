//! Read-only content store.

mod loader;
mod mock;

pub use loader::{LoadError, load_questions_from_json};
pub use mock::{
    coding_question, current_user, list_achievements, list_coding_questions, list_games,
    list_questions, list_tournaments, list_users,
};
