use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::{Product, ProductId, ProductSchema};
use crate::config::Config;
use crate::fetch::{FetchController, FetchState, Retriever};
use crate::storage::{KeyValueStore, Persisted, StorageError};
use crate::ui::auth::{AuthIntent, AuthReducer, AuthState};
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::form::FormState;
use crate::ui::mvi::dispatch;
use crate::ui::notification::{NotificationCenter, NotificationState, Severity};
use crate::ui::page::Page;

/// Storage key of the demo page's persisted name.
pub const DEMO_NAME_KEY: &str = "demoName";
pub const DEMO_NAME_DEFAULT: &str = "Guest";
pub const USERNAME_FIELD: &str = "username";
pub const QUANTITY_FIELD: &str = "quantity";

/// Catalog fetch as used by the products page.
pub type CatalogFetch<R> = FetchController<R, Vec<Product>>;

/// Session state and the commands the view layer issues against it.
///
/// Every holder is passed in or built from explicit arguments; nothing is
/// looked up ambiently.
pub struct App<R: Retriever> {
    should_quit: bool,
    page: Page,
    size: Option<(u16, u16)>,
    catalog_url: String,
    schema: ProductSchema,
    catalog: CatalogFetch<R>,
    cart: CartState,
    auth: AuthState,
    notifications: NotificationCenter,
    login_form: FormState,
    quantity_form: FormState,
    editing_quantity: bool,
    product_selection: usize,
    cart_selection: usize,
    demo_toggle: bool,
    demo_name: Persisted<String>,
    editing_name: bool,
}

impl<R: Retriever> App<R> {
    pub fn new(
        config: &Config,
        catalog: CatalogFetch<R>,
        notifications: NotificationCenter,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            page: Page::Home,
            size: None,
            catalog_url: config.catalog.url.trim().to_string(),
            schema: config.catalog.schema.clone(),
            catalog,
            cart: CartState::default(),
            auth: AuthState::default(),
            notifications,
            login_form: FormState::new(&[(USERNAME_FIELD, "")]),
            quantity_form: FormState::new(&[(QUANTITY_FIELD, "")]),
            editing_quantity: false,
            product_selection: 0,
            cart_selection: 0,
            demo_toggle: false,
            demo_name: Persisted::load(store, DEMO_NAME_KEY, DEMO_NAME_DEFAULT.to_string()),
            editing_name: false,
        };
        app.set_page(config.ui.start_page);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn schema(&self) -> &ProductSchema {
        &self.schema
    }

    // -- navigation -----------------------------------------------------------

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. The catalog is only fetched while the products page is
    /// shown; leaving it abandons any request still in flight.
    pub fn set_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        info!(from = self.page.title(), to = page.title(), "page change");
        if self.page == Page::Products {
            self.catalog.set_identifier("");
        }
        if self.page == Page::Demo {
            self.editing_name = false;
        }
        if self.page == Page::Cart {
            self.cancel_quantity_edit();
        }
        self.page = page;
        if page == Page::Products {
            self.catalog.set_identifier(&self.catalog_url);
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.prev());
    }

    /// True when printable keys should go into a text field.
    pub fn is_text_input_active(&self) -> bool {
        match self.page {
            Page::Profile => !self.auth.is_authenticated(),
            Page::Cart => self.editing_quantity,
            Page::Demo => self.editing_name,
            _ => false,
        }
    }

    // -- event loop hooks -----------------------------------------------------

    /// Apply settled fetches and fired timers. Returns true if anything changed.
    pub fn on_tick(&mut self) -> bool {
        let catalog_changed = self.catalog.poll();
        if catalog_changed {
            self.clamp_product_selection();
        }
        let notifications_changed = self.notifications.poll();
        catalog_changed || notifications_changed
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    // -- catalog --------------------------------------------------------------

    pub fn catalog_state(&self) -> &FetchState<Vec<Product>> {
        self.catalog.state()
    }

    pub fn refresh_catalog(&mut self) {
        if self.page == Page::Products {
            self.catalog.refresh();
        }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog
            .state()
            .data()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn product_selection(&self) -> usize {
        self.product_selection
    }

    pub fn move_product_selection(&mut self, direction: i32) {
        self.product_selection =
            wrap_selection(self.product_selection, self.products().len(), direction);
    }

    pub fn add_selected_to_cart(&mut self) -> bool {
        let Some(product) = self.products().get(self.product_selection).cloned() else {
            return false;
        };
        self.add_to_cart(product);
        true
    }

    fn clamp_product_selection(&mut self) {
        let len = self.products().len();
        self.product_selection = self.product_selection.min(len.saturating_sub(1));
    }

    // -- cart -----------------------------------------------------------------

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn cart_selection(&self) -> usize {
        self.cart_selection
    }

    pub fn move_cart_selection(&mut self, direction: i32) {
        self.cart_selection = wrap_selection(self.cart_selection, self.cart.len(), direction);
    }

    pub fn add_to_cart(&mut self, product: Product) {
        let title = self.schema.display_title(&product);
        dispatch::<CartReducer>(&mut self.cart, CartIntent::Add { product });
        self.notifications
            .show(format!("{} added to cart!", title), Severity::Success);
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        dispatch::<CartReducer>(&mut self.cart, CartIntent::Remove { id });
        self.cart_selection = self
            .cart_selection
            .min(self.cart.len().saturating_sub(1));
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        dispatch::<CartReducer>(&mut self.cart, CartIntent::SetQuantity { id, quantity });
    }

    /// Adjust the selected line by `delta`; the reducer keeps it at 1 or more.
    pub fn adjust_selected_quantity(&mut self, delta: i64) {
        let Some(item) = self.cart.items().get(self.cart_selection) else {
            return;
        };
        let id = item.id().clone();
        let quantity = i64::from(item.quantity).saturating_add(delta);
        self.set_quantity(id, quantity);
    }

    pub fn remove_selected(&mut self) {
        let Some(item) = self.cart.items().get(self.cart_selection) else {
            return;
        };
        let id = item.id().clone();
        let title = self.schema.display_title(&item.product);
        self.remove_from_cart(id);
        self.notifications
            .show(format!("{} removed from cart.", title), Severity::Info);
    }

    pub fn clear_cart(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        dispatch::<CartReducer>(&mut self.cart, CartIntent::Clear);
        self.cart_selection = 0;
        self.notifications.show("Cart cleared.", Severity::Info);
    }

    pub fn quantity_form(&self) -> &FormState {
        &self.quantity_form
    }

    pub fn is_editing_quantity(&self) -> bool {
        self.editing_quantity
    }

    /// Open the quantity field for the selected line. Needs a non-empty cart.
    pub fn start_editing_quantity(&mut self) {
        if self.page == Page::Cart && !self.cart.is_empty() {
            self.quantity_form.reset();
            self.editing_quantity = true;
        }
    }

    /// Only digits and a sign are accepted.
    pub fn type_quantity(&mut self, ch: char) {
        if ch.is_ascii_digit() || ch == '-' {
            self.quantity_form.push_char(QUANTITY_FIELD, ch);
        }
    }

    pub fn backspace_quantity(&mut self) {
        self.quantity_form.pop_char(QUANTITY_FIELD);
    }

    pub fn cancel_quantity_edit(&mut self) {
        self.quantity_form.reset();
        self.editing_quantity = false;
    }

    /// Apply the typed quantity to the selected line. Empty or unparsable
    /// input counts as 1; the reducer clamps anything below 1.
    pub fn submit_quantity(&mut self) {
        let quantity = self
            .quantity_form
            .value(QUANTITY_FIELD)
            .trim()
            .parse::<i64>()
            .unwrap_or(1);
        if let Some(item) = self.cart.items().get(self.cart_selection) {
            let id = item.id().clone();
            self.set_quantity(id, quantity);
        }
        self.cancel_quantity_edit();
    }

    // -- auth -----------------------------------------------------------------

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn login_form(&self) -> &FormState {
        &self.login_form
    }

    pub fn type_username(&mut self, ch: char) {
        self.login_form.push_char(USERNAME_FIELD, ch);
    }

    pub fn backspace_username(&mut self) {
        self.login_form.pop_char(USERNAME_FIELD);
    }

    /// Log in with the typed username. An empty name is refused with an
    /// error notification.
    pub fn submit_login(&mut self) -> bool {
        let name = self.login_form.value(USERNAME_FIELD).trim().to_string();
        if name.is_empty() {
            self.notifications
                .show("Please enter a username", Severity::Error);
            return false;
        }
        dispatch::<AuthReducer>(
            &mut self.auth,
            AuthIntent::Login {
                name: name.clone(),
                email: String::new(),
            },
        );
        self.login_form.reset();
        self.notifications
            .show(format!("Welcome, {}!", name), Severity::Success);
        true
    }

    pub fn logout(&mut self) {
        if !self.auth.is_authenticated() {
            return;
        }
        self.notifications
            .show("You have been logged out.", Severity::Info);
        dispatch::<AuthReducer>(&mut self.auth, AuthIntent::Logout);
    }

    // -- notifications --------------------------------------------------------

    pub fn notification(&self) -> &NotificationState {
        self.notifications.state()
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications.show(message, severity);
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    // -- demo page ------------------------------------------------------------

    pub fn demo_toggle(&self) -> bool {
        self.demo_toggle
    }

    pub fn toggle_demo_message(&mut self) {
        self.demo_toggle = !self.demo_toggle;
    }

    pub fn demo_name(&self) -> &str {
        self.demo_name.get()
    }

    pub fn is_editing_name(&self) -> bool {
        self.editing_name
    }

    pub fn start_editing_name(&mut self) {
        if self.page == Page::Demo {
            self.editing_name = true;
        }
    }

    pub fn stop_editing_name(&mut self) {
        self.editing_name = false;
    }

    pub fn type_name(&mut self, ch: char) {
        let result = self.demo_name.update(|name| name.push(ch));
        self.report_storage(result);
    }

    pub fn backspace_name(&mut self) {
        let result = self.demo_name.update(|name| {
            name.pop();
        });
        self.report_storage(result);
    }

    fn report_storage(&mut self, result: Result<(), StorageError>) {
        if let Err(err) = result {
            warn!(error = %err, key = DEMO_NAME_KEY, "failed to persist value");
            self.notifications
                .show(format!("Could not save: {}", err), Severity::Error);
        }
    }
}

/// Move a list cursor by one step in `direction`, wrapping at both ends.
fn wrap_selection(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
