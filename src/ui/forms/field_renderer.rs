//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn field_block(label: &str, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {label} "))];
    if let Some(message) = error {
        title.push(Span::styled(
            format!("{message} "),
            Style::default().fg(Color::Red),
        ));
    }

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Draw a free-text field with placeholder and cursor
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(label, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw an enum select shown as "◂ value ▸"
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selection: Option<&str>,
    placeholder: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let content = match selection {
        Some(value) => Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                value.to_string(),
                if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = field_block(label, is_active, error);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the timeline slider with its month readout
pub fn draw_slider_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: u8,
    max: u8,
    is_active: bool,
) {
    let inner_width = area.width.saturating_sub(12) as usize;
    let filled = if max == 0 {
        0
    } else {
        inner_width * value as usize / max as usize
    };

    let bar: String = "━".repeat(filled) + "●" + &"─".repeat(inner_width.saturating_sub(filled));
    let content = Line::from(vec![
        Span::styled(
            bar,
            if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::styled(
            format!(" {value} months"),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let block = field_block(label, is_active, None);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// One "[x] Label" checklist line
pub fn checkbox_line(label: &str, checked: bool, highlighted: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("{mark}{label}"), style))
}

/// One "(•) Label" radio line
pub fn radio_line(label: &str, selected: bool, highlighted: bool) -> Span<'static> {
    let mark = if selected { "(•) " } else { "( ) " };
    let style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{mark}{label}  "), style)
}
