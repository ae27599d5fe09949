use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::assistant::{Assistant, Category, MessageBank};
use crate::config::Config;
use crate::data::{self, current_user, list_games, list_tournaments};
use crate::engine::{EngineError, EngineSettings, Reveal, SessionEvent, SessionHandle};
use crate::models::{Framework, Game, Question, QuizResult, Tournament};
use crate::snippet::{CategoryHits, SnippetError, SnippetPanel, Submission, search};
use crate::state::{AppState, View};

/// Tournaments listed in the lobby sidebar.
pub const LIVE_TOURNAMENTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyFocus {
    Games,
    Tournaments,
}

/// The quiz as the view sees it, rebuilt from session events.
pub struct ActiveQuiz {
    handle: SessionHandle,
    events: UnboundedReceiver<SessionEvent>,
    title: String,
    total: usize,
    index: usize,
    question: Option<Question>,
    remaining: u32,
    cursor: usize,
    reveal: Option<Reveal>,
    correct: usize,
}

impl ActiveQuiz {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Highlighted option before the answer is locked in.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// A question is on screen and has not been revealed.
    fn is_answerable(&self) -> bool {
        self.question.is_some() && self.reveal.is_none()
    }

    fn option_count(&self) -> usize {
        self.question.as_ref().map_or(0, |q| q.options.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetMode {
    Edit,
    Reference { term: String, selected: usize },
}

pub struct SnippetView {
    panel: SnippetPanel,
    mode: SnippetMode,
}

impl SnippetView {
    pub fn panel(&self) -> &SnippetPanel {
        &self.panel
    }

    pub fn mode(&self) -> &SnippetMode {
        &self.mode
    }

    /// Reference entries matching the current search term.
    pub fn matches(&self) -> Vec<CategoryHits> {
        match &self.mode {
            SnippetMode::Reference { term, .. } => search(self.panel.reference(), term),
            SnippetMode::Edit => search(self.panel.reference(), ""),
        }
    }

    fn selected_pattern(&self) -> Option<&'static str> {
        let SnippetMode::Reference { selected, .. } = &self.mode else {
            return None;
        };
        self.matches()
            .iter()
            .flat_map(|hits| hits.patterns().collect::<Vec<_>>())
            .nth(*selected)
    }
}

pub struct App {
    state: AppState,
    settings: EngineSettings,
    questions: Vec<Question>,
    games: Vec<Game>,
    tournaments: Vec<Tournament>,
    assistant: Assistant,
    focus: LobbyFocus,
    game_cursor: usize,
    tournament_cursor: usize,
    quiz: Option<ActiveQuiz>,
    last_result: Option<QuizResult>,
    snippet: Option<SnippetView>,
    should_quit: bool,
}

impl App {
    pub fn new(questions: Vec<Question>, config: &Config) -> Self {
        let user = current_user();
        let rng = match config.assistant.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut assistant = Assistant::new(
            MessageBank::standard(user.level),
            config.assistant.history_cap,
            rng,
        );
        assistant.greet();

        Self {
            state: AppState::new(user),
            settings: config.engine_settings(),
            questions,
            games: list_games(),
            tournaments: list_tournaments(),
            assistant,
            focus: LobbyFocus::Games,
            game_cursor: 0,
            tournament_cursor: 0,
            quiz: None,
            last_result: None,
            snippet: None,
            should_quit: false,
        }
    }

    /// App over the built-in questions with default settings.
    pub fn with_defaults() -> Self {
        Self::new(data::list_questions(), &Config::default())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn live_tournaments(&self) -> &[Tournament] {
        &self.tournaments[..self.tournaments.len().min(LIVE_TOURNAMENTS)]
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn focus(&self) -> LobbyFocus {
        self.focus
    }

    pub fn game_cursor(&self) -> usize {
        self.game_cursor
    }

    pub fn tournament_cursor(&self) -> usize {
        self.tournament_cursor
    }

    pub fn quiz(&self) -> Option<&ActiveQuiz> {
        self.quiz.as_ref()
    }

    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    pub fn snippet(&self) -> Option<&SnippetView> {
        self.snippet.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LobbyFocus::Games => LobbyFocus::Tournaments,
            LobbyFocus::Tournaments => LobbyFocus::Games,
        };
    }

    pub fn select_next(&mut self) {
        match self.focus {
            LobbyFocus::Games => self.game_cursor = step(self.game_cursor, self.games.len(), 1),
            LobbyFocus::Tournaments => {
                let len = self.live_tournaments().len();
                self.tournament_cursor = step(self.tournament_cursor, len, 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            LobbyFocus::Games => {
                self.game_cursor = step(self.game_cursor, self.games.len(), -1)
            }
            LobbyFocus::Tournaments => {
                let len = self.live_tournaments().len();
                self.tournament_cursor = step(self.tournament_cursor, len, -1);
            }
        }
    }

    /// Act on the highlighted lobby entry.
    pub fn activate(&mut self) -> Result<(), EngineError> {
        match self.focus {
            LobbyFocus::Games => self.play_selected_game(),
            LobbyFocus::Tournaments => {
                self.join_selected_tournament();
                Ok(())
            }
        }
    }

    /// Start a quiz session for the highlighted game.
    pub fn play_selected_game(&mut self) -> Result<(), EngineError> {
        let title = self
            .games
            .get(self.game_cursor)
            .map_or_else(|| "Quick Quiz".to_string(), |g| g.title.clone());

        let (handle, events) = SessionHandle::start(self.questions.clone(), &self.settings)?;
        tracing::info!(session = %handle.id(), game = %title, "game started");

        self.assistant.react_to(&format!("Starting game: {}", title));
        self.quiz = Some(ActiveQuiz {
            handle,
            events,
            title,
            total: self.questions.len(),
            index: 0,
            question: None,
            remaining: self.settings.timer_secs,
            cursor: 0,
            reveal: None,
            correct: 0,
        });
        self.state.view = View::Quiz;
        Ok(())
    }

    pub fn join_selected_tournament(&mut self) {
        let Some(tournament) = self.live_tournaments().get(self.tournament_cursor) else {
            return;
        };
        let activity = format!("Joined tournament: {}", tournament.title);
        tracing::info!(tournament = %tournament.id, "tournament joined");
        self.assistant.react_to(&activity);
    }

    /// Apply whatever the running session has reported since the last call.
    pub fn poll_session(&mut self) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };

        let mut completed = None;
        while let Ok(event) = quiz.events.try_recv() {
            match event {
                SessionEvent::Question {
                    index,
                    question,
                    remaining,
                } => {
                    quiz.index = index;
                    quiz.question = Some(question);
                    quiz.remaining = remaining;
                    quiz.cursor = 0;
                    quiz.reveal = None;
                }
                SessionEvent::Tick { index, remaining } => {
                    if index == quiz.index {
                        quiz.remaining = remaining;
                    }
                }
                SessionEvent::Revealed(reveal) => {
                    if reveal.activity.is_correct() {
                        quiz.correct += 1;
                    }
                    self.assistant.react_to(reveal.activity.description());
                    quiz.reveal = Some(reveal);
                }
                SessionEvent::Completed(result) => {
                    completed = Some(result);
                    break;
                }
            }
        }

        if let Some(result) = completed {
            self.finish_quiz(result);
        }
    }

    fn finish_quiz(&mut self, result: QuizResult) {
        self.quiz = None;
        self.state.record_result(&result);
        self.assistant.react_to(&format!(
            "Quiz completed! {} correct answers",
            result.correct_answers
        ));
        self.last_result = Some(result);
        self.state.view = View::Summary;
    }

    pub fn next_option(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.cursor = step(quiz.cursor, quiz.option_count(), 1);
        }
    }

    pub fn previous_option(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.cursor = step(quiz.cursor, quiz.option_count(), -1);
        }
    }

    /// Lock in the highlighted option.
    pub fn submit_answer(&mut self) {
        if let Some(quiz) = self.quiz.as_ref().filter(|q| q.is_answerable()) {
            quiz.handle.select_answer(quiz.index, quiz.cursor);
        }
    }

    /// Lock in option `index` directly.
    pub fn answer(&mut self, index: usize) {
        let Some(quiz) = self.quiz.as_mut().filter(|q| q.is_answerable()) else {
            return;
        };
        if index < quiz.option_count() {
            quiz.cursor = index;
            quiz.handle.select_answer(quiz.index, index);
        }
    }

    /// Leave the quiz early. The session is torn down and nothing is recorded.
    pub fn close_quiz(&mut self) {
        if let Some(quiz) = self.quiz.take() {
            quiz.handle.close();
        }
        self.state.view = View::Lobby;
    }

    pub fn back_to_lobby(&mut self) {
        if self.quiz.is_some() {
            self.close_quiz();
        }
        self.snippet = None;
        self.state.view = View::Lobby;
    }

    pub fn open_snippet(&mut self, framework: Framework) -> Result<(), SnippetError> {
        let Some(question) = data::coding_question(framework) else {
            tracing::warn!(%framework, "no practice question for framework");
            return Ok(());
        };
        let panel = SnippetPanel::new(question)?;
        self.snippet = Some(SnippetView {
            panel,
            mode: SnippetMode::Edit,
        });
        self.state.view = View::Snippet(framework);
        self.assistant.select_message(Category::Tip);
        Ok(())
    }

    pub fn snippet_insert(&mut self, c: char) {
        let Some(view) = self.snippet.as_mut() else {
            return;
        };
        match &mut view.mode {
            SnippetMode::Edit => view.panel.insert_char(c),
            SnippetMode::Reference { term, selected } => {
                term.push(c);
                *selected = 0;
            }
        }
    }

    pub fn snippet_backspace(&mut self) {
        let Some(view) = self.snippet.as_mut() else {
            return;
        };
        match &mut view.mode {
            SnippetMode::Edit => view.panel.backspace(),
            SnippetMode::Reference { term, selected } => {
                term.pop();
                *selected = 0;
            }
        }
    }

    pub fn snippet_left(&mut self) {
        if let Some(view) = self.snippet.as_mut() {
            view.panel.move_left();
        }
    }

    pub fn snippet_right(&mut self) {
        if let Some(view) = self.snippet.as_mut() {
            view.panel.move_right();
        }
    }

    pub fn run_snippet(&mut self) {
        if let Some(view) = self.snippet.as_mut() {
            view.panel.run();
        }
    }

    pub fn submit_snippet(&mut self) -> Option<Submission> {
        let view = self.snippet.as_ref()?;
        let submission = view.panel.submit();

        match &submission {
            Submission::RunFirst(reminder) => {
                self.assistant
                    .push_custom(Category::Encouragement, reminder.as_str());
            }
            Submission::Graded { passed, .. } => {
                tracing::info!(
                    question = %view.panel.question().id,
                    passed,
                    "snippet submitted"
                );
                self.assistant
                    .react_to(if *passed { "correct" } else { "wrong" });
            }
        }
        Some(submission)
    }

    pub fn reset_snippet(&mut self) {
        if let Some(view) = self.snippet.as_mut() {
            view.panel.reset();
            view.mode = SnippetMode::Edit;
        }
    }

    pub fn snippet_hint(&mut self) {
        let Some(view) = self.snippet.as_mut() else {
            return;
        };
        if let Some(hint) = view.panel.take_hint() {
            self.assistant.push_custom(Category::Hint, hint);
        }
    }

    /// Switch between the editor and the pattern reference.
    pub fn toggle_reference(&mut self) {
        if let Some(view) = self.snippet.as_mut() {
            view.mode = match view.mode {
                SnippetMode::Edit => SnippetMode::Reference {
                    term: String::new(),
                    selected: 0,
                },
                SnippetMode::Reference { .. } => SnippetMode::Edit,
            };
        }
    }

    pub fn reference_next(&mut self) {
        self.move_reference(1);
    }

    pub fn reference_previous(&mut self) {
        self.move_reference(-1);
    }

    fn move_reference(&mut self, delta: isize) {
        let Some(view) = self.snippet.as_mut() else {
            return;
        };
        let count: usize = view.matches().iter().map(|h| h.patterns().count()).sum();
        if let SnippetMode::Reference { selected, .. } = &mut view.mode {
            *selected = step(*selected, count, delta);
        }
    }

    /// Insert the highlighted reference pattern at the cursor and return to
    /// the editor.
    pub fn insert_reference(&mut self) {
        let Some(view) = self.snippet.as_mut() else {
            return;
        };
        let Some(pattern) = view.selected_pattern() else {
            return;
        };
        view.panel.insert_str(pattern);
        view.mode = SnippetMode::Edit;
        self.assistant.push_custom(
            Category::Tip,
            format!("Inserted \"{}\" into your code.", pattern),
        );
    }
}

/// Move `current` by `delta` within `0..len`, wrapping around.
fn step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Category;
    use std::time::Duration;

    fn app() -> App {
        let config = Config::from_toml("[assistant]\nseed = 1\n").unwrap();
        App::new(data::list_questions(), &config)
    }

    async fn settle(app: &mut App, secs: u64) {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        tokio::task::yield_now().await;
        app.poll_session();
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 3, -1), 2);
        assert_eq!(step(2, 3, 1), 0);
        assert_eq!(step(5, 0, 1), 0);
    }

    #[test]
    fn test_new_app_greets() {
        let app = app();
        assert_eq!(app.view(), View::Lobby);
        assert_eq!(app.assistant().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_quiz_updates_profile() {
        let mut app = app();
        let coins = app.state().user().coins;

        app.play_selected_game().unwrap();
        assert_eq!(app.view(), View::Quiz);
        settle(&mut app, 0).await;
        assert_eq!(app.quiz().unwrap().index(), 0);

        for answer in [1, 0, 0] {
            app.answer(answer);
            settle(&mut app, 1).await;
            assert!(app.quiz().is_none_or(|q| q.reveal().is_some()));
            settle(&mut app, 2).await;
        }

        assert_eq!(app.view(), View::Summary);
        let result = app.last_result().unwrap();
        assert_eq!(result.correct_answers, 3);
        assert_eq!(app.state().user().coins, coins + 30);
        assert_eq!(
            app.assistant().current().unwrap().category,
            Category::Celebration
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_before_next_question_is_shown_does_nothing() {
        let mut app = app();
        app.play_selected_game().unwrap();
        settle(&mut app, 0).await;

        app.answer(1);
        settle(&mut app, 1).await;
        assert!(app.quiz().unwrap().reveal().is_some());

        // the engine moves on while the view still shows the reveal
        tokio::time::sleep(Duration::from_secs(2)).await;
        app.submit_answer();
        app.next_option();
        app.answer(0);
        settle(&mut app, 0).await;

        let quiz = app.quiz().unwrap();
        assert_eq!(quiz.index(), 1);
        assert!(quiz.reveal().is_none());
        assert_eq!(quiz.cursor(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_before_first_question_does_nothing() {
        let mut app = app();
        app.play_selected_game().unwrap();
        app.submit_answer();
        settle(&mut app, 0).await;

        let quiz = app.quiz().unwrap();
        assert_eq!(quiz.index(), 0);
        assert!(quiz.question().is_some());
        assert!(quiz.reveal().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_quiz_records_nothing() {
        let mut app = app();
        let before = app.state().user().clone();

        app.play_selected_game().unwrap();
        settle(&mut app, 0).await;
        app.close_quiz();
        settle(&mut app, 120).await;

        assert_eq!(app.view(), View::Lobby);
        assert!(app.last_result().is_none());
        assert_eq!(app.state().user(), &before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_questions_stay_in_lobby() {
        let mut app = App::new(Vec::new(), &Config::default());
        assert_eq!(app.play_selected_game(), Err(EngineError::EmptySequence));
        assert_eq!(app.view(), View::Lobby);
    }

    #[test]
    fn test_join_tournament_reacts() {
        let mut app = app();
        app.toggle_focus();
        app.activate().unwrap();
        assert_eq!(app.assistant().len(), 2);
        assert_eq!(
            app.assistant().current().unwrap().category,
            Category::Encouragement
        );
    }

    #[test]
    fn test_snippet_submit_before_run_goes_to_assistant() {
        let mut app = app();
        app.open_snippet(Framework::Vue).unwrap();
        assert_eq!(app.view(), View::Snippet(Framework::Vue));

        let submission = app.submit_snippet().unwrap();
        assert!(matches!(submission, Submission::RunFirst(_)));
        let current = app.assistant().current().unwrap();
        assert_eq!(current.category, Category::Encouragement);
        assert!(current.text.contains("run your Vue component first"));
    }

    #[test]
    fn test_snippet_starter_passes_after_run() {
        let mut app = app();
        app.open_snippet(Framework::Angular).unwrap();
        app.run_snippet();
        assert!(matches!(
            app.submit_snippet(),
            Some(Submission::Graded { passed: true, .. })
        ));
    }

    #[test]
    fn test_hint_reaches_assistant_once() {
        let mut app = app();
        app.open_snippet(Framework::Vue).unwrap();
        app.snippet_hint();
        let len = app.assistant().len();
        assert_eq!(app.assistant().current().unwrap().category, Category::Hint);

        app.snippet_hint();
        assert_eq!(app.assistant().len(), len);
    }

    #[test]
    fn test_reference_search_and_insert() {
        let mut app = app();
        app.open_snippet(Framework::Vue).unwrap();
        app.reset_snippet();
        app.toggle_reference();
        for c in "v-model".chars() {
            app.snippet_insert(c);
        }
        app.insert_reference();

        let view = app.snippet().unwrap();
        assert_eq!(view.mode(), &SnippetMode::Edit);
        assert!(view.panel().code().ends_with(r#"v-model="data""#));
    }
}
