use serde::{Deserialize, Serialize};

/// Severity level for user-visible notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLength {
    Short,
    Long,
}

/// A brief textual notification shown over the renderer surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub length: ToastLength,
}

impl Notification {
    /// Creates a short info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            length: ToastLength::Short,
        }
    }

    /// Creates a long warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
            length: ToastLength::Long,
        }
    }

    /// Creates a short error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            length: ToastLength::Short,
        }
    }

    /// Overrides the display length.
    pub fn with_length(mut self, length: ToastLength) -> Self {
        self.length = length;
        self
    }
}
