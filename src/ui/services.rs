//! Services section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Draw the services section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for offering in &content::SERVICE_OFFERINGS {
        lines.push(Line::from(Span::styled(
            offering.title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(offering.body));
        lines.push(Line::from(""));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press 'g' to tell us about your project.",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset, 0))
        .block(
            Block::default()
                .title(" Our Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
