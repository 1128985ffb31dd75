use std::time::{Duration, Instant};

use crate::theme::notification::{self as colors, NotificationColors};

/// Determines style and how long a notification stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    /// Stays until dismissed
    Error,
}

impl NotificationKind {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationKind::Warning => Some(Duration::from_secs(10)),
            NotificationKind::Error => None,
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationKind::Warning => &colors::WARNING,
            NotificationKind::Error => &colors::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        match self.kind.duration() {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_kind(message, NotificationKind::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_kind(message, NotificationKind::Error);
    }

    fn show_with_kind(&mut self, message: &str, kind: NotificationKind) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
