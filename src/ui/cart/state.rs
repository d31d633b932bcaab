//! State for the shopping cart.

use crate::catalog::{Product, ProductId, ProductSchema};
use crate::ui::mvi::UiState;

/// One line of the cart: the product as it was added, plus a count.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Cart contents in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub(super) items: Vec<CartItem>,
}

impl UiState for CartState {}

impl CartState {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sum of quantities across all lines (the header badge).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price × quantity. Lines without a price count as zero.
    pub fn subtotal(&self, schema: &ProductSchema) -> f64 {
        self.items
            .iter()
            .map(|item| schema.price(&item.product).unwrap_or(0.0) * f64::from(item.quantity))
            .sum()
    }
}
