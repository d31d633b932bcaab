//! Intents for the notification slot.

use crate::ui::mvi::Intent;

use super::state::Notification;

#[derive(Debug, Clone)]
pub enum NotificationIntent {
    /// Replace whatever is showing with `notification`.
    Show {
        notification: Notification,
        generation: u64,
    },

    /// User closed the toast: start fading out now.
    Dismiss,

    /// Clear the slot immediately.
    Hide,

    /// Visibility timer fired for `generation`.
    Expire { generation: u64 },

    /// Fade-out finished for `generation`.
    Clear { generation: u64 },
}

impl Intent for NotificationIntent {}
