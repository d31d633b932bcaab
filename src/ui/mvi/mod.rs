//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every piece of session state (cart, auth, notifications) is a
//! [`UiState`] changed only by running an [`Intent`] through its
//! [`Reducer`].
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
