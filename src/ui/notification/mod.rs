//! Toast notifications.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden → Visible → FadingOut → Hidden
//! - `intent.rs` - Show, Dismiss, Hide and timer events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `timer.rs` - [`NotificationCenter`], which owns the state and the
//!   timer task that emits `Expire`/`Clear`

mod intent;
mod reducer;
mod state;
mod timer;

pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use state::{Notification, NotificationState, Severity, DEFAULT_DURATION, DEFAULT_FADE};
pub use timer::NotificationCenter;
