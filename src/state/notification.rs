//! On-screen notification (toast) state.
//!
//! Only one notification is visible at a time; showing a new one replaces
//! the current one.

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    /// Fraction of the lifetime already elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        (elapsed.as_secs_f32() / NOTIFICATION_LIFETIME.as_secs_f32()).min(1.0)
    }
}

/// The currently visible notification, if any.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing whatever was on screen.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let message = message.into();
        match kind {
            NotificationKind::Error => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        self.current = Some(Notification {
            message,
            kind,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Warning);
    }

    /// Drops the notification once its lifetime has passed.
    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTIFICATION_LIFETIME)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
