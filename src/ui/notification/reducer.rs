//! Reducer for the notification slot.

use crate::ui::mvi::Reducer;

use super::intent::NotificationIntent;
use super::state::NotificationState;

/// Timer intents only apply to the generation they were scheduled for.
pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Show {
                notification,
                generation,
            } => NotificationState::Visible {
                notification,
                generation,
            },

            NotificationIntent::Dismiss => match state {
                NotificationState::Visible {
                    notification,
                    generation,
                } => NotificationState::FadingOut {
                    notification,
                    generation,
                },
                other => other,
            },

            NotificationIntent::Hide => NotificationState::Hidden,

            NotificationIntent::Expire { generation } => match state {
                NotificationState::Visible {
                    notification,
                    generation: current,
                } if current == generation => NotificationState::FadingOut {
                    notification,
                    generation,
                },
                other => other,
            },

            NotificationIntent::Clear { generation } => match state {
                NotificationState::Visible {
                    generation: current,
                    ..
                }
                | NotificationState::FadingOut {
                    generation: current,
                    ..
                } if current == generation => NotificationState::Hidden,
                other => other,
            },
        }
    }
}
