//! Field rendering utilities for forms

use crate::state::FieldName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input; a validation error turns the border red and is shown
/// along the bottom edge
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = match (is_active, error.is_some()) {
        (_, true) => Color::Red,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let (display_str, value_style) = if value.is_empty() && !is_active {
        (field.placeholder(), Style::default().fg(Color::DarkGray))
    } else if is_active {
        (value, Style::default().fg(Color::Cyan))
    } else {
        (value, Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.is_select() {
        let shown = if value.is_empty() {
            field.placeholder()
        } else {
            value
        };
        let arrows = if is_active { ("◂ ", " ▸") } else { ("", "") };
        Paragraph::new(Line::from(vec![
            Span::styled(arrows.0, cursor_style),
            Span::styled(shown, value_style),
            Span::styled(arrows.1, cursor_style),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        // Borders take two columns and the cursor one
        let shown = if is_active {
            visible_tail(display_str, area.width.saturating_sub(3) as usize)
        } else {
            display_str
        };
        Paragraph::new(Line::from(vec![
            Span::styled(shown, value_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(message) = error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// The last `width` characters of `text`, so typing stays in view
fn visible_tail(text: &str, width: usize) -> &str {
    let len = text.chars().count();
    if len <= width {
        return text;
    }
    match text.char_indices().nth(len - width) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
