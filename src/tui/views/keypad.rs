//! Keypad view
//!
//! Four columns of keys; the `0` key spans two columns like a desk
//! calculator's.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calculator::{Key, Operator};
use crate::tui::app::App;

/// Keypad rows; each key carries its width in columns
pub const KEYPAD: [&[(Key, u16)]; 5] = [
    &[
        (Key::Clear, 1),
        (Key::ToggleSign, 1),
        (Key::Percent, 1),
        (Key::Operator(Operator::Div), 1),
    ],
    &[
        (Key::Digit('7'), 1),
        (Key::Digit('8'), 1),
        (Key::Digit('9'), 1),
        (Key::Operator(Operator::Mul), 1),
    ],
    &[
        (Key::Digit('4'), 1),
        (Key::Digit('5'), 1),
        (Key::Digit('6'), 1),
        (Key::Operator(Operator::Sub), 1),
    ],
    &[
        (Key::Digit('1'), 1),
        (Key::Digit('2'), 1),
        (Key::Digit('3'), 1),
        (Key::Operator(Operator::Add), 1),
    ],
    &[(Key::Digit('0'), 2), (Key::Digit('.'), 1), (Key::Equals, 1)],
];

fn key_color(key: Key) -> Color {
    match key {
        Key::Digit(_) => Color::White,
        Key::Operator(_) | Key::Equals => Color::Yellow,
        Key::Clear | Key::ToggleSign | Key::Percent => Color::Gray,
    }
}

/// Render the keypad grid
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (row, keys) in rows.iter().zip(KEYPAD) {
        let constraints: Vec<Constraint> = keys
            .iter()
            .map(|&(_, span)| Constraint::Ratio(u32::from(span), 4))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(*row);

        for (cell, &(key, _)) in cells.iter().zip(keys.iter()) {
            render_key(frame, key, app.last_key == Some(key), *cell);
        }
    }
}

fn render_key(frame: &mut Frame, key: Key, pressed: bool, area: Rect) {
    let color = key_color(key);
    let style = if pressed {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(key.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(block);

    frame.render_widget(paragraph, area);
}
