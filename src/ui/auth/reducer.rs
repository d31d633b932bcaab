use crate::ui::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::{AuthState, User};

pub const FAKE_USER_ID: u64 = 1;
pub const DEFAULT_NAME: &str = "Test User";
pub const DEFAULT_EMAIL: &str = "test@example.com";

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Login { name, email } => AuthState::SignedIn(User {
                id: FAKE_USER_ID,
                name: non_blank(name, DEFAULT_NAME),
                email: non_blank(email, DEFAULT_EMAIL),
            }),
            AuthIntent::Logout => AuthState::Anonymous,
        }
    }
}

fn non_blank(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
