//! Get Started view: collapsed call to action, or the full qualification form

use crate::app::App;
use crate::state::{
    ContactMethod, FieldId, InquiryForm, Service, TIMELINE_MAX,
};
use crate::ui::components::render_button;
use crate::ui::forms::field_renderer::{
    checkbox_line, draw_select_field, draw_slider_field, draw_text_field, radio_line,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the Get Started section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get Started ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.state.inquiry;
    if form.is_editing() {
        draw_expanded(frame, inner, form);
    } else {
        draw_collapsed(frame, inner);
    }
}

fn draw_collapsed(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Let's Bring Your Vision to Life",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[1]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Tell us about your project and we'll craft a plan that fits.",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[3]);

    let button_width = 18u16.min(rows[5].width);
    let button_area = Rect {
        x: rows[5].x + (rows[5].width.saturating_sub(button_width)) / 2,
        y: rows[5].y,
        width: button_width,
        height: rows[5].height,
    };
    render_button(frame, button_area, "Get Started", true, Some(Color::Green));
}

fn draw_expanded(frame: &mut Frame, area: Rect, form: &InquiryForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name | Email
            Constraint::Length(3), // Company | Website
            Constraint::Length(3), // Project type | Budget
            Constraint::Length(3), // Timeline | Start date
            Constraint::Length(8), // Services | Contact method + Newsletter
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Cancel / Submit
        ])
        .split(area);

    let active = form.active_field();

    let pair = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };

    let row0 = pair(rows[0]);
    draw_text_field(
        frame,
        row0[0],
        FieldId::Name.label(),
        &form.name,
        "Your name",
        active == Some(FieldId::Name),
        false,
        form.error(FieldId::Name),
    );
    draw_text_field(
        frame,
        row0[1],
        FieldId::Email.label(),
        &form.email,
        "you@company.com",
        active == Some(FieldId::Email),
        false,
        form.error(FieldId::Email),
    );

    let row1 = pair(rows[1]);
    draw_text_field(
        frame,
        row1[0],
        FieldId::Company.label(),
        &form.company,
        "Company (optional)",
        active == Some(FieldId::Company),
        false,
        None,
    );
    draw_text_field(
        frame,
        row1[1],
        FieldId::Website.label(),
        &form.website,
        "https://… (optional)",
        active == Some(FieldId::Website),
        false,
        None,
    );

    let row2 = pair(rows[2]);
    draw_select_field(
        frame,
        row2[0],
        FieldId::ProjectType.label(),
        form.project_type.map(|p| p.label()),
        "←/→ to choose",
        active == Some(FieldId::ProjectType),
        form.error(FieldId::ProjectType),
    );
    draw_select_field(
        frame,
        row2[1],
        FieldId::Budget.label(),
        form.budget.map(|b| b.label()),
        "←/→ to choose",
        active == Some(FieldId::Budget),
        form.error(FieldId::Budget),
    );

    let row3 = pair(rows[3]);
    draw_slider_field(
        frame,
        row3[0],
        FieldId::Timeline.label(),
        form.timeline,
        TIMELINE_MAX,
        active == Some(FieldId::Timeline),
    );
    draw_text_field(
        frame,
        row3[1],
        FieldId::StartDate.label(),
        &form.start_date,
        "YYYY-MM-DD (optional)",
        active == Some(FieldId::StartDate),
        false,
        None,
    );

    let row4 = pair(rows[4]);
    draw_services(frame, row4[0], form, active == Some(FieldId::Services));
    draw_method_and_newsletter(frame, row4[1], form, active);

    draw_text_field(
        frame,
        rows[5],
        FieldId::Message.label(),
        &form.message,
        "Tell us about your project",
        active == Some(FieldId::Message),
        true,
        form.error(FieldId::Message),
    );

    draw_buttons(frame, rows[6], form);
}

fn draw_services(frame: &mut Frame, area: Rect, form: &InquiryForm, is_active: bool) {
    let lines: Vec<Line> = Service::ALL
        .iter()
        .enumerate()
        .map(|(idx, service)| {
            checkbox_line(
                service.label(),
                form.services.contains(service),
                is_active && idx == form.service_cursor,
            )
        })
        .collect();

    let border_style = if form.error(FieldId::Services).is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {} ", FieldId::Services.label()))];
    if let Some(message) = form.error(FieldId::Services) {
        title.push(Span::styled(
            format!("{message} "),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_method_and_newsletter(
    frame: &mut Frame,
    area: Rect,
    form: &InquiryForm,
    active: Option<FieldId>,
) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let method_active = active == Some(FieldId::ContactMethod);
    let method_line = Line::from(vec![
        radio_line(
            "Email",
            form.contact_method == ContactMethod::Email,
            method_active,
        ),
        radio_line(
            "Phone",
            form.contact_method == ContactMethod::Phone,
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
    frame.render_widget(Paragraph::new(method_line).block(method_block), halves[0]);

    let newsletter_active = active == Some(FieldId::Newsletter);
    let newsletter_line = checkbox_line(
        "Keep me posted on studio news",
        form.newsletter,
        newsletter_active,
    );
    let newsletter_block = Block::default()
        .title(format!(" {} ", FieldId::Newsletter.label()))
        .borders(Borders::ALL)
        .border_style(if newsletter_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(
        Paragraph::new(newsletter_line).block(newsletter_block),
        halves[1],
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &InquiryForm) {
    const BUTTON_WIDTH: u16 = 12;
    let on_buttons = form.is_buttons_row_active();

    let submit_area = Rect {
        x: (area.x + area.width).saturating_sub(BUTTON_WIDTH),
        y: area.y,
        width: BUTTON_WIDTH.min(area.width),
        height: area.height,
    };
    let cancel_area = Rect {
        x: submit_area.x.saturating_sub(BUTTON_WIDTH + 1),
        y: area.y,
        width: BUTTON_WIDTH,
        height: area.height,
    };

    render_button(
        frame,
        cancel_area,
        "Cancel",
        on_buttons && form.selected_button == 0,
        Some(Color::Red),
    );
    render_button(
        frame,
        submit_area,
        "Submit",
        on_buttons && form.selected_button == 1,
        Some(Color::Green),
    );
}
