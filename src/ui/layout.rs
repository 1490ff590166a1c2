//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed section buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend([Constraint::Length(BUTTON_HEIGHT); View::SIDEBAR.len()]);
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::SIDEBAR.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        render_sidebar_button(frame, chunks[idx + 1], idx + 1, view.label(), is_selected);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.label()),
        Style::default().fg(Color::Blue),
    )];

    let hints = get_view_hints(&app.state.current_view, app);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Copy feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, app: &App) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "1-8:sections  g:get started  c:contact  j/k:scroll".to_string(),
        View::Contact => {
            format!("Tab:next  Enter:send  ^Y:copy email  Esc:back  {}", crate::platform::SUBMIT_HINT)
        }
        View::GetStarted if app.state.inquiry.is_editing() => {
            format!("Tab:next  Space:toggle  {}  Esc:cancel", crate::platform::SUBMIT_HINT)
        }
        View::GetStarted => "Enter:start  Esc:back".to_string(),
        _ => "1-8:sections  j/k:scroll  Esc:back".to_string(),
    }
}
