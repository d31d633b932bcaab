//! Intents for the shopping cart.

use crate::catalog::{Product, ProductId};
use crate::ui::mvi::Intent;

/// Commands that can be dispatched to the cart reducer.
#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Add one unit of `product`, appending a new line if it is not in the cart.
    Add { product: Product },

    /// Drop the line for `id`.
    Remove { id: ProductId },

    /// Set the quantity of the line for `id`. Values below 1 become 1.
    SetQuantity { id: ProductId, quantity: i64 },

    /// Empty the cart.
    Clear,
}

impl Intent for CartIntent {}
