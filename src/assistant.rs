//! Bob the Bot: short contextual lines picked from static tables.
//!
//! Selection is a pure function of the category and a caller-supplied random
//! source, so a seeded [`StdRng`] gives repeatable output. [`Assistant`]
//! keeps the most recent messages, newest first, up to a fixed cap.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_HISTORY_CAP: usize = 5;

const LAST_RESORT: &str = "Keep going, scholar!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tip,
    Encouragement,
    Celebration,
    Hint,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tip,
        Category::Encouragement,
        Category::Celebration,
        Category::Hint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tip => "tip",
            Category::Encouragement => "encouragement",
            Category::Celebration => "celebration",
            Category::Hint => "hint",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown message category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tip" | "tips" => Ok(Category::Tip),
            "encouragement" => Ok(Category::Encouragement),
            "celebration" => Ok(Category::Celebration),
            "hint" | "hints" => Ok(Category::Hint),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Map a free-form activity description to the category Bob answers with.
pub fn category_for_activity(activity: &str) -> Category {
    if activity.contains("correct") {
        Category::Celebration
    } else if activity.contains("wrong") {
        Category::Encouragement
    } else if activity.contains("hint") {
        Category::Tip
    } else {
        Category::Encouragement
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantMessage {
    pub id: Uuid,
    pub category: Category,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl AssistantMessage {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// The line tables, one per category plus the welcome lines used as fallback.
#[derive(Debug, Clone, Default)]
pub struct MessageBank {
    welcome: Vec<String>,
    tables: HashMap<Category, Vec<String>>,
}

impl MessageBank {
    pub fn new(welcome: Vec<String>) -> Self {
        Self {
            welcome,
            tables: HashMap::new(),
        }
    }

    pub fn with_table(mut self, category: Category, lines: Vec<String>) -> Self {
        self.tables.insert(category, lines);
        self
    }

    /// Bob's stock lines. One welcome line mentions the player's level.
    pub fn standard(user_level: u32) -> Self {
        let welcome = vec![
            "Welcome back to Scholars Table! Ready to win some knowledge?".to_string(),
            format!("Hey there, scholar! I see you're level {}. Impressive!", user_level),
            "The tables are hot tonight! Which subject calls to you?".to_string(),
            "Ready to code your way to victory? Our programming challenges await!".to_string(),
            "From HTML to Python, we've got all the coding skills you need!".to_string(),
        ];

        Self::new(welcome)
            .with_table(
                Category::Encouragement,
                lines(&[
                    "Don't worry about that wrong answer - every mistake is a learning opportunity!",
                    "You're getting better with each question. Keep it up!",
                    "Remember, even Einstein made mistakes. What matters is that you keep trying!",
                    "Debugging is just another word for learning! Keep coding!",
                    "Every programmer started with their first 'Hello World' - you're doing great!",
                ]),
            )
            .with_table(
                Category::Celebration,
                lines(&[
                    "Fantastic! You're on fire! 🔥",
                    "That's what I call a winning streak! Well done!",
                    "You just earned some serious bragging rights!",
                    "Your code is as clean as your answers! Excellent work!",
                    "You're coding like a pro! Keep up the amazing work!",
                ]),
            )
            .with_table(
                Category::Tip,
                lines(&[
                    "Pro tip: Take your time to read each question carefully before answering.",
                    "Did you know? Playing different difficulty levels helps reinforce concepts!",
                    "Tournament strategy: Focus on accuracy over speed for better scores.",
                    "Coding tip: Practice makes perfect - try different programming languages!",
                    "Remember: Good code is readable code. Think about clarity and structure!",
                ]),
            )
            .with_table(
                Category::Hint,
                lines(&[
                    "Having trouble? Try breaking the problem into smaller parts.",
                    "Remember to check the units in physics problems - they often hold clues!",
                    "For chemistry questions, think about electron configurations step by step.",
                    "For coding questions, think about the syntax and logic step by step.",
                    "HTML tip: Remember that structure comes first, then styling with CSS!",
                ]),
            )
    }

    pub fn welcome(&self) -> &[String] {
        &self.welcome
    }

    /// Lines for `category`, or the welcome lines when that table is missing
    /// or empty.
    pub fn lines(&self, category: Category) -> &[String] {
        match self.tables.get(&category) {
            Some(table) if !table.is_empty() => table,
            _ => {
                tracing::warn!(%category, "no lines for category, using welcome table");
                &self.welcome
            }
        }
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pick<R: Rng + ?Sized>(table: &[String], rng: &mut R) -> String {
    table
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| LAST_RESORT.to_string())
}

/// Pick one line of `category` uniformly at random.
pub fn select_message<R: Rng + ?Sized>(
    bank: &MessageBank,
    category: Category,
    rng: &mut R,
) -> AssistantMessage {
    AssistantMessage::new(category, pick(bank.lines(category), rng))
}

/// Bob's state: the line tables, a random source and the recent history.
pub struct Assistant<R = StdRng> {
    bank: MessageBank,
    history: VecDeque<AssistantMessage>,
    cap: usize,
    rng: R,
}

impl<R: Rng> Assistant<R> {
    pub fn new(bank: MessageBank, cap: usize, rng: R) -> Self {
        let cap = cap.max(1);
        Self {
            bank,
            history: VecDeque::with_capacity(cap),
            cap,
            rng,
        }
    }

    /// Opening line, taken from the welcome table.
    pub fn greet(&mut self) -> &AssistantMessage {
        let text = pick(self.bank.welcome(), &mut self.rng);
        self.push(AssistantMessage::new(Category::Tip, text))
    }

    pub fn select_message(&mut self, category: Category) -> &AssistantMessage {
        let message = select_message(&self.bank, category, &mut self.rng);
        self.push(message)
    }

    /// Like [`select_message`](Self::select_message) but from a category
    /// name; unknown names fall back to encouragement.
    pub fn select_named(&mut self, name: &str) -> &AssistantMessage {
        let category = name.parse().unwrap_or_else(|err: UnknownCategory| {
            tracing::warn!(%err, "falling back to encouragement");
            Category::Encouragement
        });
        self.select_message(category)
    }

    /// Respond to something the player just did.
    pub fn react_to(&mut self, activity: &str) -> &AssistantMessage {
        let category = category_for_activity(activity);
        tracing::debug!(activity, %category, "assistant reacting");
        self.select_message(category)
    }

    /// Surface a specific line, e.g. a question's own hint.
    pub fn push_custom(&mut self, category: Category, text: impl Into<String>) -> &AssistantMessage {
        self.push(AssistantMessage::new(category, text))
    }

    pub fn current(&self) -> Option<&AssistantMessage> {
        self.history.front()
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &AssistantMessage> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn push(&mut self, message: AssistantMessage) -> &AssistantMessage {
        self.history.push_front(message);
        self.history.truncate(self.cap);
        &self.history[0]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn seeded(seed: u64) -> Assistant {
        Assistant::new(
            MessageBank::standard(12),
            DEFAULT_HISTORY_CAP,
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_history_is_capped_and_newest_first() {
        let mut bob = seeded(7);
        let mut last_id = None;
        for i in 0..12 {
            let category = Category::ALL[i % Category::ALL.len()];
            last_id = Some(bob.select_message(category).id);
            assert!(bob.len() <= DEFAULT_HISTORY_CAP);
        }
        assert_eq!(bob.len(), DEFAULT_HISTORY_CAP);
        assert_eq!(bob.current().map(|m| m.id), last_id);

        let stamps: Vec<_> = bob.history().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_same_seed_same_lines() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for category in Category::ALL {
            assert_eq!(
                a.select_message(category).text,
                b.select_message(category).text
            );
        }
    }

    #[test]
    fn test_selected_line_comes_from_category_table() {
        let bank = MessageBank::standard(3);
        let mut rng = StdRng::seed_from_u64(1);
        for category in Category::ALL {
            let message = select_message(&bank, category, &mut rng);
            assert_eq!(message.category, category);
            assert!(bank.lines(category).contains(&message.text));
        }
    }

    #[test]
    fn test_missing_table_falls_back_to_welcome() {
        let bank = MessageBank::new(vec!["hello".to_string()]);
        let mut rng = StdRng::seed_from_u64(0);
        let message = select_message(&bank, Category::Hint, &mut rng);
        assert_eq!(message.text, "hello");
        assert_eq!(message.category, Category::Hint);
    }

    #[test]
    fn test_empty_bank_still_answers() {
        let bank = MessageBank::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_message(&bank, Category::Tip, &mut rng).text, LAST_RESORT);
    }

    #[test]
    fn test_activity_mapping() {
        assert_eq!(category_for_activity("correct"), Category::Celebration);
        assert_eq!(
            category_for_activity("Quiz completed! 2 correct answers"),
            Category::Celebration
        );
        assert_eq!(category_for_activity("wrong"), Category::Encouragement);
        assert_eq!(category_for_activity("asked for a hint"), Category::Tip);
        assert_eq!(
            category_for_activity("Starting game: Chemistry Quest"),
            Category::Encouragement
        );
    }

    #[test]
    fn test_category_names() {
        assert_eq!("tips".parse::<Category>(), Ok(Category::Tip));
        assert_eq!("Hint".parse::<Category>(), Ok(Category::Hint));
        assert_eq!(
            "jokes".parse::<Category>(),
            Err(UnknownCategory("jokes".to_string()))
        );

        let mut bob = seeded(3);
        assert_eq!(bob.select_named("jokes").category, Category::Encouragement);
    }

    #[test]
    fn test_greeting_mentions_welcome_lines() {
        let mut bob = seeded(9);
        let text = bob.greet().text.clone();
        assert!(MessageBank::standard(12).welcome().contains(&text));
    }

    #[test]
    fn test_custom_lines_enter_history() {
        let mut bob = seeded(5);
        bob.greet();
        bob.push_custom(Category::Hint, "Split 15 into 10 and 5.");
        assert_eq!(bob.current().unwrap().text, "Split 15 into 10 and 5.");
        assert_eq!(bob.len(), 2);
    }
}
