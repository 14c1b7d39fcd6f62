//! Status bar view
//!
//! Key hints for the calculator screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar
pub fn render(frame: &mut Frame, area: Rect) {
    let hints = [
        ("0-9 .", "digits"),
        ("+-*/", "ops"),
        ("n", "±"),
        ("c", "clear"),
        ("q", "quit"),
    ];

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(":{} ", action)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
