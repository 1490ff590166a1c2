//! Expertise section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the expertise section as a scrollable column of areas
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for area_info in &content::EXPERTISE {
        lines.push(Line::from(Span::styled(
            area_info.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(area_info.body));
        lines.push(Line::from(""));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset, 0))
        .block(
            Block::default()
                .title(" Our Expertise ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
