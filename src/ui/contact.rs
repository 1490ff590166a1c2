//! Contact section: studio details plus the inline message form

use crate::app::App;
use crate::content;
use crate::state::{ContactForm, FieldId};
use crate::ui::components::render_button;
use crate::ui::forms::field_renderer::{draw_select_field, draw_text_field, radio_line};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Draw the contact section: details on the left, form on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(inner);

    draw_details(frame, columns[0]);
    draw_form(frame, columns[1], &app.state.contact);
}

fn draw_details(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Let's build something together.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Address  ", Style::default().fg(Color::DarkGray)),
            Span::raw(content::CONTACT_ADDRESS),
        ]),
        Line::from(vec![
            Span::styled("Email    ", Style::default().fg(Color::DarkGray)),
            Span::styled(content::CONTACT_EMAIL, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Phone    ", Style::default().fg(Color::DarkGray)),
            Span::raw(content::CONTACT_PHONE),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Ctrl+Y copies our email address.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Company
            Constraint::Length(3), // Project type | Budget
            Constraint::Length(3), // Contact method
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Send
        ])
        .split(area);

    let active = form.active_field();

    draw_text_field(
        frame,
        rows[0],
        FieldId::Name.label(),
        &form.name,
        "Your name",
        active == Some(FieldId::Name),
        false,
        None,
    );
    draw_text_field(
        frame,
        rows[1],
        FieldId::Email.label(),
        &form.email,
        "you@company.com",
        active == Some(FieldId::Email),
        false,
        None,
    );
    draw_text_field(
        frame,
        rows[2],
        FieldId::Company.label(),
        &form.company,
        "Company (optional)",
        active == Some(FieldId::Company),
        false,
        None,
    );

    let selects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    draw_select_field(
        frame,
        selects[0],
        FieldId::ProjectType.label(),
        form.project_type.map(|p| p.label()),
        "←/→ to choose",
        active == Some(FieldId::ProjectType),
        None,
    );
    draw_select_field(
        frame,
        selects[1],
        FieldId::Budget.label(),
        form.budget.map(|b| b.label()),
        "←/→ to choose",
        active == Some(FieldId::Budget),
        None,
    );

    let method_active = active == Some(FieldId::ContactMethod);
    let method_line = Line::from(vec![
        radio_line(
            "Email",
            form.contact_method == crate::state::ContactMethod::Email,
            method_active,
        ),
        radio_line(
            "Phone",
            form.contact_method == crate::state::ContactMethod::Phone,
            method_active,
        ),
    ]);
    let method_block = Block::default()
        .title(format!(" {} ", FieldId::ContactMethod.label()))
        .borders(Borders::ALL)
        .border_style(if method_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(Paragraph::new(method_line).block(method_block), rows[4]);

    draw_text_field(
        frame,
        rows[5],
        FieldId::Message.label(),
        &form.message,
        "How can we help?",
        active == Some(FieldId::Message),
        true,
        None,
    );

    let send_area = Rect {
        x: rows[6].x,
        y: rows[6].y,
        width: 12.min(rows[6].width),
        height: rows[6].height,
    };
    render_button(
        frame,
        send_area,
        "Send",
        form.is_send_button_active(),
        Some(Color::Green),
    );
}
