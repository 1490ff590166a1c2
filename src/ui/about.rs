//! About section with headline stats

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the about section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" About {} ", content::STUDIO_NAME))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Copy
            Constraint::Percentage(40), // Stats grid
        ])
        .margin(1)
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in content::ABOUT_PARAGRAPHS {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }
    let copy = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset, 0));
    frame.render_widget(copy, chunks[0]);

    draw_stats_grid(frame, chunks[1]);
}

/// 2x2 grid of headline figures
fn draw_stats_grid(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    for (row_idx, row_area) in rows.iter().take(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (col_idx, col_area) in cols.iter().enumerate() {
            let (figure, label) = content::STATS[row_idx * 2 + col_idx];
            draw_stat_card(frame, *col_area, figure, label);
        }
    }
}

fn draw_stat_card(frame: &mut Frame, area: Rect, figure: &str, label: &str) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            figure,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}
