//! Built-in fixtures. Every accessor hands out fresh copies; nothing here is
//! ever mutated.

use chrono::{Duration, NaiveDate, Utc};

use crate::models::{
    Achievement, CodingQuestion, Difficulty, Framework, Game, GameType, Question, Subject,
    TestCase, Tournament, TournamentParticipant, TournamentStatus, User, UserStats,
};

pub fn list_questions() -> Vec<Question> {
    vec![
        Question {
            id: "1".to_string(),
            subject: Subject::Mathematics,
            difficulty: Difficulty::Basic,
            text: "What is 15 × 8?".to_string(),
            options: strings(&["110", "120", "130", "125"]),
            correct_answer: 1,
            explanation: "15 × 8 = 120. You can solve this by breaking it down: \
                          (10 × 8) + (5 × 8) = 80 + 40 = 120"
                .to_string(),
            xp_reward: 50,
            coin_reward: 10,
            hint: Some("Split 15 into 10 and 5.".to_string()),
        },
        Question {
            id: "2".to_string(),
            subject: Subject::Physics,
            difficulty: Difficulty::Intermediate,
            text: "What is the speed of light in vacuum?".to_string(),
            options: strings(&[
                "299,792,458 m/s",
                "300,000,000 m/s",
                "299,000,000 m/s",
                "301,000,000 m/s",
            ]),
            correct_answer: 0,
            explanation: "The speed of light in vacuum is exactly 299,792,458 meters per second, \
                          which is often approximated as 3 × 10⁸ m/s."
                .to_string(),
            xp_reward: 75,
            coin_reward: 15,
            hint: Some("The metre is defined from it, so the value is exact.".to_string()),
        },
        Question {
            id: "3".to_string(),
            subject: Subject::Chemistry,
            difficulty: Difficulty::Advanced,
            text: "What is the electron configuration of Iron (Fe)?".to_string(),
            options: strings(&["[Ar] 3d⁶ 4s²", "[Ar] 3d⁵ 4s²", "[Ar] 3d⁷ 4s¹", "[Ar] 3d⁸"]),
            correct_answer: 0,
            explanation: "Iron (Fe) has 26 electrons. Its electron configuration is [Ar] 3d⁶ 4s², \
                          following the Aufbau principle."
                .to_string(),
            xp_reward: 100,
            coin_reward: 25,
            hint: None,
        },
    ]
}

pub fn list_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            title: "First Win".to_string(),
            description: "Won your first quiz game".to_string(),
            icon: "🏆".to_string(),
            earned: true,
            earned_at: NaiveDate::from_ymd_opt(2024, 1, 15),
        },
        Achievement {
            id: "2".to_string(),
            title: "Math Master".to_string(),
            description: "Answered 100 math questions correctly".to_string(),
            icon: "🧮".to_string(),
            earned: true,
            earned_at: NaiveDate::from_ymd_opt(2024, 1, 20),
        },
        Achievement {
            id: "3".to_string(),
            title: "Physics Pioneer".to_string(),
            description: "Completed advanced physics challenges".to_string(),
            icon: "⚡".to_string(),
            earned: false,
            earned_at: None,
        },
    ]
}

/// The signed-in player at startup.
pub fn current_user() -> User {
    User {
        id: "1".to_string(),
        name: "Alex Scholar".to_string(),
        coins: 2500,
        xp: 15750,
        level: 12,
        achievements: list_achievements(),
        stats: UserStats {
            games_played: 127,
            questions_answered: 892,
            correct_answers: 734,
            streak_record: 23,
            tournaments_won: 3,
            total_xp_earned: 15750,
        },
    }
}

pub fn list_users() -> Vec<User> {
    let rival = User {
        id: "2".to_string(),
        name: "Sarah Einstein".to_string(),
        coins: 1800,
        xp: 14200,
        level: 11,
        achievements: Vec::new(),
        stats: UserStats {
            games_played: 98,
            questions_answered: 701,
            correct_answers: 602,
            streak_record: 19,
            tournaments_won: 2,
            total_xp_earned: 14200,
        },
    };
    vec![current_user(), rival]
}

/// Tournaments are scheduled relative to the moment they are listed.
pub fn list_tournaments() -> Vec<Tournament> {
    let now = Utc::now();
    vec![
        Tournament {
            id: "1".to_string(),
            title: "Math Mastery Challenge".to_string(),
            description: "Test your mathematical skills in this exciting tournament!".to_string(),
            subject: Subject::Mathematics,
            difficulty: Difficulty::Intermediate,
            start_time: now + Duration::hours(2),
            end_time: now + Duration::hours(6),
            prize: 5000,
            participants: vec![
                TournamentParticipant {
                    user_id: "1".to_string(),
                    name: "Alex Scholar".to_string(),
                    score: 1250,
                    questions_answered: 15,
                    correct_answers: 13,
                    time_spent: 420,
                },
                TournamentParticipant {
                    user_id: "2".to_string(),
                    name: "Sarah Einstein".to_string(),
                    score: 1180,
                    questions_answered: 14,
                    correct_answers: 12,
                    time_spent: 380,
                },
            ],
            sponsor: Some("MathTech Academy".to_string()),
            status: TournamentStatus::Active,
        },
        Tournament {
            id: "2".to_string(),
            title: "Physics Phenomena".to_string(),
            description: "Explore the wonders of physics in this championship!".to_string(),
            subject: Subject::Physics,
            difficulty: Difficulty::Advanced,
            start_time: now + Duration::hours(24),
            end_time: now + Duration::hours(28),
            prize: 7500,
            participants: Vec::new(),
            sponsor: Some("Quantum Labs".to_string()),
            status: TournamentStatus::Upcoming,
        },
    ]
}

pub fn list_games() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            title: "Knowledge Roulette".to_string(),
            description: "Spin the wheel of knowledge! Answer random questions to win coins."
                .to_string(),
            subject: Subject::Mathematics,
            difficulty: Difficulty::Basic,
            kind: GameType::Quiz,
            min_bet: 10,
            max_bet: 100,
            icon: "🎰".to_string(),
        },
        Game {
            id: "2".to_string(),
            title: "Physics Challenge".to_string(),
            description: "Test your physics knowledge in this strategic challenge game."
                .to_string(),
            subject: Subject::Physics,
            difficulty: Difficulty::Intermediate,
            kind: GameType::Challenge,
            min_bet: 25,
            max_bet: 250,
            icon: "🃏".to_string(),
        },
        Game {
            id: "3".to_string(),
            title: "Chemistry Quest".to_string(),
            description: "Match molecular structures to win big in this exciting puzzle game."
                .to_string(),
            subject: Subject::Chemistry,
            difficulty: Difficulty::Advanced,
            kind: GameType::Puzzle,
            min_bet: 50,
            max_bet: 500,
            icon: "🎲".to_string(),
        },
    ]
}

/// Practice prompts for the snippet panels. The stock starter component is
/// used for both, so the checks pass once the player runs it unchanged.
pub fn list_coding_questions() -> Vec<CodingQuestion> {
    vec![
        CodingQuestion {
            id: "vue-1".to_string(),
            framework: Framework::Vue,
            difficulty: Difficulty::Basic,
            text: "Build a counter component that also renders a list of items.".to_string(),
            code_template: None,
            expected_output: Some("A heading, a count with two buttons and a bulleted list.".to_string()),
            test_cases: vec![
                TestCase::new("v-for", "List rendering with v-for"),
                TestCase::new("@click", "Click handler bound with @click"),
                TestCase::new("{{ count }}", "Count interpolated into the template"),
            ],
            hint: Some("Use v-for on the <li> and bind the buttons with @click.".to_string()),
        },
        CodingQuestion {
            id: "angular-1".to_string(),
            framework: Framework::Angular,
            difficulty: Difficulty::Intermediate,
            text: "Write a component that increments a counter and lists items.".to_string(),
            code_template: None,
            expected_output: Some("A heading, a count with a button and a bulleted list.".to_string()),
            test_cases: vec![
                TestCase::new("*ngFor", "List rendering with *ngFor"),
                TestCase::new("(click)", "Event binding with (click)"),
                TestCase::new("@Component", "Component decorator"),
            ],
            hint: Some("Structural directives start with an asterisk: *ngFor.".to_string()),
        },
    ]
}

pub fn coding_question(framework: Framework) -> Option<CodingQuestion> {
    list_coding_questions()
        .into_iter()
        .find(|q| q.framework == framework)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
