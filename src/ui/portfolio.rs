//! Portfolio section rendered as a card grid

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 6;

/// Draw the portfolio section as a 2-column card grid
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Our Portfolio ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = content::PORTFOLIO.len().div_ceil(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(inner);

    // Scroll by whole rows
    let first_row = (app.state.scroll_offset as usize / CARD_HEIGHT as usize).min(row_count - 1);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let item_row = first_row + row_idx;
        if item_row >= row_count {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (col_idx, col_area) in cols.iter().enumerate() {
            if let Some(item) = content::PORTFOLIO.get(item_row * 2 + col_idx) {
                draw_card(frame, *col_area, item);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, item: &content::PortfolioItem) {
    let card = Paragraph::new(vec![Line::from(item.description)])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Line::from(Span::styled(
                    format!(" {} ", item.title),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(card, area);
}
