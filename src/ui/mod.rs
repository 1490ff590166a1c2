//! TUI rendering modules

mod about;
pub mod components;
mod contact;
mod expertise;
pub mod forms;
mod home;
mod layout;
mod portfolio;
mod services;
mod splash;
mod testimonials;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Draw the whole frame for the current application state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Splash owns the full screen until its animation completes
    if app.state.current_view == View::Splash {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Splash => {}
        View::Home => home::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area, app),
        View::Expertise => expertise::draw(frame, main_area, app),
        View::Services => services::draw(frame, main_area, app),
        View::Portfolio => portfolio::draw(frame, main_area, app),
        View::Testimonials => testimonials::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
        View::GetStarted => forms::inquiry_form::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if let Some(toast) = app.notifier.active() {
        components::render_toast(frame, toast);
    }
}
