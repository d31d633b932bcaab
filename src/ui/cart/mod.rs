//! Shopping cart feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Ordered line items, unique by product id
//! - `intent.rs` - Add, Remove, SetQuantity, Clear
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::{CartItem, CartState};
