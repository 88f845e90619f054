//! Enquiry form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, FormButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form: one row per visible field, then the buttons and help line
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let fields = form.visible_fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| {
            if f.is_multiline() {
                Constraint::Min(4)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1)); // Help text

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            *field,
            form.data.value(*field),
            form.active_field_index == idx,
            app.state.error_for(*field),
        );
    }

    draw_buttons(frame, chunks[fields.len()], app);
    draw_help(frame, chunks[fields.len() + 1], form.focused_field());
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons = form.is_buttons_row_active();

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Submit
            Constraint::Length(1),
            Constraint::Length(14), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        button_chunks[0],
        FormButton::Submit.label(),
        on_buttons && form.selected_button == FormButton::Submit,
        Color::Green,
    );
    render_button(
        frame,
        button_chunks[2],
        FormButton::Reset.label(),
        on_buttons && form.selected_button == FormButton::Reset,
        Color::Yellow,
    );
}

fn draw_help(frame: &mut Frame, area: Rect, focused: Option<FieldName>) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
    ];
    if focused == Some(FieldName::Type) {
        spans.push(Span::styled("←→", key_style));
        spans.push(Span::raw(": choose type  "));
    }
    spans.extend([
        Span::styled(SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled(RESET_SHORTCUT, key_style),
        Span::raw(": reset  "),
        Span::styled("Ctrl+C", key_style),
        Span::raw(": quit"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
