use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::assistant::{Assistant, Category};

fn category_color(category: Category) -> Color {
    match category {
        Category::Tip => Color::Blue,
        Category::Encouragement => Color::Green,
        Category::Celebration => Color::Yellow,
        Category::Hint => Color::Magenta,
    }
}

pub fn render(frame: &mut Frame, area: Rect, assistant: &Assistant) {
    let mut lines: Vec<Line> = Vec::new();

    for (position, message) in assistant.history().enumerate() {
        let color = category_color(message.category);
        let text_style = if position == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(vec![
            Span::styled(
                message.category.as_str().to_uppercase(),
                Style::default().fg(color).bold(),
            ),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(message.text.as_str(), text_style)));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Bob the Bot ")
            .borders(Borders::LEFT)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
