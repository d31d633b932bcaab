//! Reducer for the shopping cart.

use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::{CartItem, CartState};

/// Reducer for cart state transitions.
///
/// Commands that name an id not in the cart leave it untouched.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut items = state.items;
        match intent {
            CartIntent::Add { product } => {
                match items.iter_mut().find(|item| item.id() == &product.id) {
                    Some(item) => item.quantity = item.quantity.saturating_add(1),
                    None => items.push(CartItem {
                        product,
                        quantity: 1,
                    }),
                }
            }

            CartIntent::Remove { id } => items.retain(|item| item.id() != &id),

            CartIntent::SetQuantity { id, quantity } => {
                if let Some(item) = items.iter_mut().find(|item| item.id() == &id) {
                    item.quantity = clamp_quantity(quantity);
                }
            }

            CartIntent::Clear => items.clear(),
        }
        CartState { items }
    }
}

fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}
