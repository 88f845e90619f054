//! Notice dialog component (info, success, error)

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notice, NoticeKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn kind_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    }
}

/// Render a notice overlay centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let color = kind_color(notice.kind);
    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            title_color: color,
            border_color: color,
            message: &notice.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
