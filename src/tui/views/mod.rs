//! TUI Views module
//!
//! The calculator screen: display, keypad, notification line and status bar.

pub mod keypad;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::widgets::NotificationWidget;

/// Width of the calculator, centred in the terminal
const CALC_WIDTH: u16 = 36;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_column(frame.area(), CALC_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    render_display(frame, app, chunks[0]);
    keypad::render(frame, app, chunks[1]);
    frame.render_widget(
        NotificationWidget::new(app.notifications.current()),
        chunks[2],
    );
    status_bar::render(frame, chunks[3]);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Calculator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(app.memory_line()).style(Style::default().fg(Color::DarkGray)),
        Line::from(app.display()).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// A column of at most `width` cells, horizontally centred
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
