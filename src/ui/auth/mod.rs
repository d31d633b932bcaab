//! Simulated login.
//!
//! There is no credential check: any login succeeds and produces the same
//! fake user id.

mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::{AuthReducer, DEFAULT_EMAIL, DEFAULT_NAME, FAKE_USER_ID};
pub use state::{AuthState, User};
