use std::time::{Duration, Instant};

use ratatui::style::Color;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

impl NotificationLevel {
    pub fn color(self) -> Color {
        match self {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

/// At most one toast is shown; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, level: NotificationLevel, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            level,
            expires_at: now + DEFAULT_DURATION,
        });
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationLevel::Info, now);
    }

    pub fn warn(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationLevel::Warning, now);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the toast if it has expired. Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn time_until_expiry(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|n| n.expires_at.saturating_duration_since(now))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
