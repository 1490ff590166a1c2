//! Testimonials section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Draw the testimonials section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for testimonial in &content::TESTIMONIALS {
        lines.push(Line::from(format!("\u{201c}{}\u{201d}", testimonial.quote)));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                testimonial.author,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", testimonial.role),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset, 0))
        .block(
            Block::default()
                .title(" What Our Clients Say ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
