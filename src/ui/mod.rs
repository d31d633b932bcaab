pub mod app;
pub mod auth;
pub mod cart;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notification;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
