//! Owner of the notification slot and its visibility timer.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::NotificationConfig;
use crate::ui::mvi::dispatch;

use super::intent::NotificationIntent;
use super::reducer::NotificationReducer;
use super::state::{Notification, NotificationState, Severity, DEFAULT_DURATION, DEFAULT_FADE};

/// Shows one notification at a time and schedules its disappearance.
///
/// Each `show` bumps the generation and replaces the timer task. The task
/// sends `Expire` after the notification's duration and `Clear` after the
/// fade window; both carry the generation, so an event from a replaced
/// notification that slips through the abort is a no-op in the reducer.
pub struct NotificationCenter {
    state: NotificationState,
    generation: u64,
    default_duration: Duration,
    fade: Duration,
    runtime: Handle,
    timer: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<NotificationIntent>,
    rx: mpsc::UnboundedReceiver<NotificationIntent>,
}

impl NotificationCenter {
    pub fn new(runtime: Handle) -> Self {
        Self::with_timing(runtime, DEFAULT_DURATION, DEFAULT_FADE)
    }

    pub fn from_config(runtime: Handle, config: &NotificationConfig) -> Self {
        Self::with_timing(runtime, config.duration(), config.fade())
    }

    /// A zero `default_duration` falls back to [`DEFAULT_DURATION`].
    pub fn with_timing(runtime: Handle, default_duration: Duration, fade: Duration) -> Self {
        let default_duration = if default_duration.is_zero() {
            DEFAULT_DURATION
        } else {
            default_duration
        };
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: NotificationState::Hidden,
            generation: 0,
            default_duration,
            fade,
            runtime,
            timer: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Show `message` for the configured default duration.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        let notification =
            Notification::new(message, severity).with_duration(self.default_duration);
        self.show_notification(notification);
    }

    /// Show a fully specified notification. A zero duration means the default.
    pub fn show_notification(&mut self, mut notification: Notification) {
        if notification.duration.is_zero() {
            notification.duration = self.default_duration;
        }

        self.generation += 1;
        self.cancel_timer();

        let generation = self.generation;
        let duration = notification.duration;
        debug!(
            generation,
            severity = %notification.severity,
            message = %notification.message,
            "showing notification"
        );
        dispatch::<NotificationReducer>(
            &mut self.state,
            NotificationIntent::Show {
                notification,
                generation,
            },
        );

        let fade = self.fade;
        let tx = self.tx.clone();
        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(NotificationIntent::Expire { generation }).is_err() {
                return;
            }
            tokio::time::sleep(fade).await;
            let _ = tx.send(NotificationIntent::Clear { generation });
        }));
    }

    /// Start fading out the current notification (close button). The slot
    /// is cleared once the fade window has passed.
    pub fn dismiss(&mut self) {
        if !self.state.is_visible() {
            return;
        }
        self.cancel_timer();
        dispatch::<NotificationReducer>(&mut self.state, NotificationIntent::Dismiss);

        let generation = self.generation;
        let fade = self.fade;
        let tx = self.tx.clone();
        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(fade).await;
            let _ = tx.send(NotificationIntent::Clear { generation });
        }));
    }

    /// Drop the current notification and its timer.
    pub fn hide(&mut self) {
        self.cancel_timer();
        dispatch::<NotificationReducer>(&mut self.state, NotificationIntent::Hide);
    }

    /// Apply timer events that have already fired. Returns true on change.
    pub fn poll(&mut self) -> bool {
        let before = self.state.clone();
        while let Ok(intent) = self.rx.try_recv() {
            dispatch::<NotificationReducer>(&mut self.state, intent);
        }
        before != self.state
    }

    /// Wait for the next timer event and apply it.
    pub async fn next_transition(&mut self) -> &NotificationState {
        if let Some(intent) = self.rx.recv().await {
            dispatch::<NotificationReducer>(&mut self.state, intent);
        }
        &self.state
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
