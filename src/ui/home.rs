//! Hero / home view

use crate::app::App;
use crate::content;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the hero section
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let block = Block::default()
        .title(format!(" {} ", content::STUDIO_NAME))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(2),             // Headline
            Constraint::Length(3),             // Subtitle
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Get Started
            Constraint::Length(2),             // Footer hint
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .margin(1)
        .split(inner);

    let headline = Paragraph::new(Line::from(Span::styled(
        content::HERO_HEADLINE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(headline, chunks[1]);

    let subtitle = Paragraph::new(content::HERO_SUBTITLE)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .centered();
    frame.render_widget(subtitle, chunks[2]);

    // Centered Get Started button; Enter or 'g' opens the form
    let button_width = 18u16.min(chunks[4].width);
    let button_area = Rect {
        x: chunks[4].x + (chunks[4].width.saturating_sub(button_width)) / 2,
        y: chunks[4].y,
        width: button_width,
        height: BUTTON_HEIGHT,
    };
    render_button(frame, button_area, "Get Started", true, Some(Color::Green));

    let footer = Paragraph::new(Line::from(Span::styled(
        content::TAGLINE,
        Style::default().fg(Color::DarkGray),
    )))
    .centered();
    frame.render_widget(footer, chunks[5]);
}
