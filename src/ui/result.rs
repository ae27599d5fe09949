use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::QuizResult;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result() else {
        return;
    };
    let grade_color = grade_color(result.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result, grade_color);
    render_rewards(frame, chunks[2], result, app);
    super::controls(frame, chunks[3], "enter lobby  ·  q quit");
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                result.correct_answers,
                result.total_questions,
                result.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_rewards(frame: &mut Frame, area: Rect, result: &QuizResult, app: &App) {
    let user = app.state().user();
    let row = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    };

    let lines = vec![
        row("XP earned", format!("+{}", result.total_xp), Color::Blue),
        row("Coins earned", format!("+{}", result.total_coins), Color::Yellow),
        row("Time spent", format!("{}s", result.time_spent), Color::Gray),
        Line::from(""),
        row("Balance", format!("{} coins", user.coins), Color::Yellow),
        row("Total XP", user.xp.to_string(), Color::Blue),
    ];

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
