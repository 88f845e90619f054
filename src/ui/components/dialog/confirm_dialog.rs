//! Confirmation dialog for clearing submissions

use super::base::{render_dialog, DialogConfig};
use crate::state::{ClearChoice, PendingClearAction};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the warning shown before every submission is removed
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingClearAction) {
    let message = format!(
        "{}\n{} submission(s) will be lost.",
        PendingClearAction::MESSAGE,
        action.submission_count
    );

    // Add options with selection highlighting
    let options = [ClearChoice::Confirm, ClearChoice::Keep];
    let colors = [Color::Red, Color::White];
    let body = options
        .iter()
        .zip(colors)
        .map(|(option, color)| {
            let is_selected = action.selected_option == *option;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{}{}", prefix, option.label()), style))
        })
        .collect();

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: PendingClearAction::TITLE,
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            body,
            hint: Some(hint),
            max_width: 56,
        },
    );
}
