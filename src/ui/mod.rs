//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_enquiry_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays: a notice sits above the confirmation
    if let Some(action) = &app.state.pending_clear {
        components::render_confirm_dialog(frame, action);
    }
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
