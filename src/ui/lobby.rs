use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, LobbyFocus};
use crate::models::{Tournament, User};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let user = app.state().user();

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], user);
    render_stats(frame, chunks[1], user);

    let [games, sidebar] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(chunks[2]);
    let [tournaments, achievements] =
        Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(sidebar);

    render_games(frame, games, app);
    render_tournaments(frame, tournaments, app);
    render_achievements(frame, achievements, user);

    super::controls(
        frame,
        chunks[3],
        "j/k move  ·  tab switch  ·  enter play/join  ·  v vue  ·  a angular  ·  q quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect, user: &User) {
    let content = vec![
        Line::from(Span::styled(
            "SCHOLARS TABLE",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from("Where knowledge meets excitement!".fg(Color::DarkGray)),
        Line::from(vec![
            Span::styled(user.name.as_str(), Style::default().fg(Color::White).bold()),
            Span::styled(
                format!("  ·  level {}  ·  {} coins", user.level, user.coins),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_stats(frame: &mut Frame, area: Rect, user: &User) {
    let stats = [
        ("Total XP", user.xp.to_string(), Color::Blue),
        ("Games Played", user.stats.games_played.to_string(), Color::Green),
        ("Accuracy", format!("{}%", user.stats.accuracy()), Color::Yellow),
        ("Best Streak", user.stats.streak_record.to_string(), Color::Magenta),
    ];

    let cells = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    for ((title, value, color), cell) in stats.into_iter().zip(cells.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
            Line::from(title.fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Color::DarkGray));
        frame.render_widget(widget, *cell);
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1))
}

fn render_games(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == LobbyFocus::Games;
    let mut lines: Vec<Line> = Vec::new();

    for (index, game) in app.games().iter().enumerate() {
        let selected = focused && index == app.game_cursor();
        let style = if selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{} {} ", marker, game.icon), style),
            Span::styled(game.title.as_str(), style),
            Span::styled(
                format!("  {} · {}", game.subject, game.difficulty),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", game.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("    bet {}-{} coins", game.min_bet, game.max_bet),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(" Scholar Games ", focused)), area);
}

fn render_tournaments(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == LobbyFocus::Tournaments;
    let lines: Vec<Line> = app
        .live_tournaments()
        .iter()
        .enumerate()
        .flat_map(|(index, tournament)| {
            tournament_lines(tournament, focused && index == app.tournament_cursor())
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Live Tournaments ", focused)),
        area,
    );
}

fn tournament_lines(tournament: &Tournament, selected: bool) -> Vec<Line<'_>> {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if selected { ">" } else { " " };

    let mut detail = format!(
        "  prize {} · {} players · {:?}",
        tournament.prize,
        tournament.participants.len(),
        tournament.status
    );
    if let Some(sponsor) = &tournament.sponsor {
        detail.push_str(&format!(" · by {}", sponsor));
    }

    vec![
        Line::from(Span::styled(format!("{} {}", marker, tournament.title), style)),
        Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("  ends {}", tournament.end_time.format("%b %d %H:%M")),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn render_achievements(frame: &mut Frame, area: Rect, user: &User) {
    let lines: Vec<Line> = user
        .earned_achievements()
        .take(3)
        .map(|achievement| {
            Line::from(vec![
                Span::raw(format!("{} ", achievement.icon)),
                Span::styled(
                    achievement.title.as_str(),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled(
                    format!("  {}", achievement.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel(" Achievements ", false)), area);
}
