//! Toast overlay rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::sink::Toast;

const MAX_WIDTH: u16 = 56;

/// Render the active toast as a small overlay near the bottom of the
/// screen, on top of whatever view is showing
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();
    let padding = 4u16;
    let max_line_width = (MAX_WIDTH - padding) as usize;

    let wrapped = wrap_text(&toast.description, max_line_width);

    let content_width = wrapped
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max(toast.title.len()) as u16;
    let toast_width = (content_width + padding + 2).min(MAX_WIDTH);
    let toast_height = (wrapped.len() as u16 + 2 + 2).max(5);

    // Bottom-centered, one row above the status bar
    let toast_x = area.x + (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = area
        .height
        .saturating_sub(toast_height + 2)
        .max(area.y);

    let toast_area = Rect {
        x: toast_x,
        y: toast_y,
        width: toast_width,
        height: toast_height,
    };

    frame.render_widget(Clear, toast_area);

    let mut content = vec![
        Line::from(Span::styled(
            toast.title.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrapped {
        content.push(Line::from(line));
    }

    let widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(widget, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("We've received your message and will get back to you soon!", 20);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.len() <= 20));
    }

    #[test]
    fn test_wrap_text_empty_input_yields_single_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_preserves_explicit_breaks() {
        let wrapped = wrap_text("one\ntwo", 20);
        assert_eq!(wrapped, vec!["one".to_string(), "two".to_string()]);
    }
}
