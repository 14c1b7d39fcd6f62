//! Notification widget
//!
//! Calculator notices and hints, shown on their own line and dismissed after
//! a few seconds.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Error => "x",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// When the notification was raised (for auto-dismiss)
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification line
pub struct NotificationWidget<'a> {
    notification: Option<&'a Notification>,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: Option<&'a Notification>) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);

        let line = match self.notification {
            Some(n) => {
                let color = n.notification_type.color();
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", n.notification_type.icon()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(n.message.as_str(), Style::default().fg(color)),
                ])
            }
            None => Line::default(),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Cannot divide by zero!");
        assert_eq!(n.message, "Cannot divide by zero!");
        assert_eq!(n.notification_type, NotificationType::Error);
        assert_eq!(n.notification_type.color(), Color::Red);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_queue_drops_expired() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_duration(Duration::ZERO));
        queue.push(Notification::info("stays"));
        assert_eq!(queue.current().unwrap().message, "gone");

        queue.remove_expired();
        assert_eq!(queue.current().unwrap().message, "stays");

        queue.clear();
        assert!(queue.is_empty());
    }
}
