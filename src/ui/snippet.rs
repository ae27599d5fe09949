use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, SnippetMode, SnippetView};
use crate::snippet::{Preview, SnippetPanel};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = app.snippet() else {
        return;
    };
    let panel = view.panel();

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_prompt(frame, chunks[0], panel);

    let [editor, side] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(chunks[1]);

    render_editor(frame, editor, panel, view.mode() == &SnippetMode::Edit);
    match view.mode() {
        SnippetMode::Edit => render_results(frame, side, panel),
        SnippetMode::Reference { term, selected } => {
            render_reference(frame, side, view, term, *selected)
        }
    }

    let hint = if panel.hint_used() || panel.question().hint.is_none() {
        ""
    } else {
        "  ·  F2 hint"
    };
    super::controls(
        frame,
        chunks[2],
        &format!("F5 run  ·  F6 submit  ·  F8 reset  ·  F3 reference{}  ·  esc lobby", hint),
    );
}

fn render_prompt(frame: &mut Frame, area: Rect, panel: &SnippetPanel) {
    let question = panel.question();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} Practice", panel.framework()),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::styled(
                format!("  ·  {}", question.difficulty),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            question.text.as_str(),
            Style::default().fg(Color::White),
        )),
    ];
    if let Some(expected) = &question.expected_output {
        lines.push(Line::from(Span::styled(
            format!("Expected: {}", expected),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_editor(frame: &mut Frame, area: Rect, panel: &SnippetPanel, focused: bool) {
    let lines = editor_lines(panel.code(), focused.then_some(panel.cursor()));
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    // Keep the cursor line on screen.
    let cursor_row = panel
        .code()
        .chars()
        .take(panel.cursor())
        .filter(|&c| c == '\n')
        .count() as u16;
    let visible = area.height.saturating_sub(2);
    let scroll = cursor_row.saturating_sub(visible.saturating_sub(1));

    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .title(" Editor ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(widget, area);
}

/// Split `code` into lines, drawing a block cursor at char index `cursor`.
fn editor_lines(code: &str, cursor: Option<usize>) -> Vec<Line<'static>> {
    let code_style = Style::default().fg(Color::Yellow);
    let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();

    for (index, c) in code.chars().chain(std::iter::once('\n')).enumerate() {
        let at_cursor = cursor == Some(index);
        if at_cursor {
            if !run.is_empty() {
                current.push(Span::styled(std::mem::take(&mut run), code_style));
            }
            let shown = if c == '\n' { ' ' } else { c };
            current.push(Span::styled(shown.to_string(), cursor_style));
        }
        if c == '\n' {
            if !run.is_empty() {
                current.push(Span::styled(std::mem::take(&mut run), code_style));
            }
            lines.push(Line::from(std::mem::take(&mut current)));
        } else if !at_cursor {
            run.push(c);
        }
    }

    lines
}

fn render_results(frame: &mut Frame, area: Rect, panel: &SnippetPanel) {
    let [output, preview] =
        Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let mut lines = Vec::new();
    if panel.output().is_empty() {
        lines.push(Line::from("Run your component to see results.".fg(Color::DarkGray)));
    } else {
        lines.push(Line::from(Span::styled(
            panel.output(),
            Style::default().fg(Color::Green),
        )));
    }
    for result in panel.results() {
        let (symbol, color) = if result.passed {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(result.expected.as_str(), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("  {}", result.actual),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(titled(" Output ")),
        output,
    );

    let preview_lines: Vec<Line> = match panel.preview() {
        Some(Preview::Rendered { fragment, .. }) => fragment
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray))))
            .collect(),
        Some(Preview::NotFound { message, .. }) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))],
        None => Vec::new(),
    };
    frame.render_widget(Paragraph::new(preview_lines).block(titled(" Preview ")), preview);
}

fn render_reference(
    frame: &mut Frame,
    area: Rect,
    view: &SnippetView,
    term: &str,
    selected: usize,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(term, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    let mut position = 0;
    let mut selected_row = 0;
    for hits in view.matches() {
        lines.push(Line::from(Span::styled(
            hits.name,
            Style::default().fg(Color::Yellow).bold(),
        )));
        for (group, patterns) in hits.groups {
            lines.push(Line::from(Span::styled(
                format!(" {}", group),
                Style::default().fg(Color::Gray),
            )));
            for pattern in patterns {
                let style = if position == selected {
                    selected_row = lines.len();
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(Span::styled(format!("   {}", pattern), style)));
                position += 1;
            }
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = selected_row.saturating_sub(visible.saturating_sub(1)) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(titled(" Reference  ·  enter insert  ·  F3 back ")),
        area,
    );
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_editor_lines_place_cursor() {
        let lines = editor_lines("ab\ncd", Some(1));
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "ab");
        assert_eq!(lines[0].spans[1].content, "b");
        assert_eq!(text(&lines[1]), "cd");
    }

    #[test]
    fn test_editor_lines_cursor_at_end() {
        let lines = editor_lines("ab", Some(2));
        assert_eq!(text(&lines[0]), "ab ");
    }
}
