use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{ActiveQuiz, App};
use crate::engine::Reveal;
use crate::models::Question;

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(quiz) = app.quiz() else {
        return;
    };
    let Some(question) = quiz.question() else {
        super::controls(frame, area, "Shuffling the deck...");
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], quiz, question);
    render_timer(frame, chunks[1], quiz, app.settings().timer_secs);
    render_question_text(frame, chunks[2], &question.text);
    render_options(frame, chunks[3], question, quiz.cursor(), quiz.reveal());
    if let Some(reveal) = quiz.reveal() {
        render_explanation(frame, chunks[4], question, reveal, app);
    }
    super::controls(
        frame,
        chunks[5],
        "j/k navigate  ·  enter select  ·  1-4 answer  ·  esc leave",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz, question: &Question) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let heading = format!(
        "{}  ·  {} ({})",
        quiz.title(),
        question.subject,
        question.difficulty
    );
    frame.render_widget(Paragraph::new(heading).fg(Color::Yellow), left);

    let progress = format!(
        "{}/{}  ·  {} correct",
        quiz.index() + 1,
        quiz.total(),
        quiz.correct()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, right);
}

fn render_timer(frame: &mut Frame, area: Rect, quiz: &ActiveQuiz, period: u32) {
    let remaining = quiz.remaining();
    let color = match remaining {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Green,
    };
    let ratio = if period == 0 {
        0.0
    } else {
        f64::from(remaining.min(period)) / f64::from(period)
    };

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}s", remaining));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    cursor: usize,
    reveal: Option<&Reveal>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(index, cursor, question.correct_answer, reveal);
        let marker = match reveal {
            Some(r) if index == r.correct_answer => "✓",
            Some(r) if r.selected == Some(index) => "✗",
            None if index == cursor => ">",
            _ => " ",
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(index: usize, cursor: usize, correct: usize, reveal: Option<&Reveal>) -> Style {
    match reveal {
        Some(_) if index == correct => Style::default().fg(Color::Green).bold(),
        Some(r) if r.selected == Some(index) => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if index == cursor => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_explanation(frame: &mut Frame, area: Rect, question: &Question, reveal: &Reveal, app: &App) {
    let settings = app.settings();
    let headline = if reveal.activity.is_correct() {
        Line::from(Span::styled(
            format!(
                "Correct!  +{} XP  +{} coins",
                settings.xp_per_correct, settings.coins_per_correct
            ),
            Style::default().fg(Color::Green).bold(),
        ))
    } else if reveal.selected.is_none() {
        Line::from(Span::styled("Time's up!", Style::default().fg(Color::Red).bold()))
    } else {
        Line::from(Span::styled("Not quite.", Style::default().fg(Color::Red).bold()))
    };

    let widget = Paragraph::new(vec![
        headline,
        Line::from(Span::styled(
            question.explanation.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
