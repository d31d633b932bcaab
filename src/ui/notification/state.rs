//! State for the notification slot.

use std::fmt;
use std::time::Duration;

use crate::ui::mvi::UiState;

/// How long a notification stays visible when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Time between becoming invisible and leaving state.
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// The single notification slot.
///
/// `generation` identifies which `show` produced the current content so
/// that timer events from a replaced notification can be ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationState {
    #[default]
    Hidden,
    Visible {
        notification: Notification,
        generation: u64,
    },
    /// Invisible but still occupying the slot until the fade completes.
    FadingOut {
        notification: Notification,
        generation: u64,
    },
}

impl UiState for NotificationState {}

impl NotificationState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Visible { notification, .. } | Self::FadingOut { notification, .. } => {
                Some(notification)
            }
            Self::Hidden => None,
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Visible { generation, .. } | Self::FadingOut { generation, .. } => {
                Some(*generation)
            }
            Self::Hidden => None,
        }
    }
}
