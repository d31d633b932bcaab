mod common;

use common::{make_app, make_app_with_store, Script, ScriptedRetriever, CATALOG_URL, TWO_PRODUCTS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopfront::fetch::FetchState;
use shopfront::ui::app::DEMO_NAME_KEY;
use shopfront::ui::auth::{DEFAULT_EMAIL, FAKE_USER_ID};
use shopfront::ui::input::handle_key;
use shopfront::ui::notification::{NotificationState, Severity};
use shopfront::ui::page::Page;
use shopfront::ui::render::draw;
use std::time::Duration;

fn catalog() -> ScriptedRetriever {
    ScriptedRetriever::new().with(CATALOG_URL, Script::ok(20, TWO_PRODUCTS))
}

fn press(app: &mut common::TestApp, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut common::TestApp, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn toast(app: &common::TestApp) -> Option<(String, Severity)> {
    match app.notification() {
        NotificationState::Visible { notification, .. } => {
            Some((notification.message.clone(), notification.severity))
        }
        _ => None,
    }
}

async fn settle_catalog(app: &mut common::TestApp) {
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.on_tick();
}

fn screen_text(app: &common::TestApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn catalog_loads_only_on_products_page() {
    let retriever = catalog();
    let calls = retriever.calls();
    let (mut app, _store) = make_app(retriever);

    assert_eq!(app.page(), Page::Home);
    assert!(app.catalog_state().is_idle());
    settle_catalog(&mut app).await;
    assert!(calls.lock().is_empty());

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.page(), Page::Products);
    assert!(app.catalog_state().is_loading());

    settle_catalog(&mut app).await;
    assert_eq!(app.products().len(), 2);
    assert_eq!(*calls.lock(), vec![CATALOG_URL.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn leaving_products_discards_in_flight_fetch() {
    let retriever = ScriptedRetriever::new().with(CATALOG_URL, Script::ok(500, TWO_PRODUCTS));
    let (mut app, _store) = make_app(retriever);

    app.set_page(Page::Products);
    app.set_page(Page::Cart);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    app.on_tick();
    assert_eq!(app.catalog_state(), &FetchState::Idle);
}

#[tokio::test(start_paused = true)]
async fn catalog_error_is_shown_inline() {
    let retriever = ScriptedRetriever::new().with(CATALOG_URL, Script::status(10, 500));
    let (mut app, _store) = make_app(retriever);

    app.set_page(Page::Products);
    settle_catalog(&mut app).await;
    assert_eq!(app.catalog_state().error(), Some("HTTP error! status: 500"));
    assert!(screen_text(&app).contains("HTTP error! status: 500"));
}

#[tokio::test(start_paused = true)]
async fn adding_to_cart_updates_badge_and_notifies() {
    let (mut app, _store) = make_app(catalog());
    app.set_page(Page::Products);
    settle_catalog(&mut app).await;

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.cart().len(), 2);
    assert_eq!(app.cart().total_quantity(), 3);
    assert_eq!(
        toast(&app),
        Some(("Lamp added to cart!".to_string(), Severity::Success))
    );

    assert!(screen_text(&app).contains("Lamp added to cart!"));
}

#[tokio::test(start_paused = true)]
async fn cart_quantity_never_drops_below_one() {
    let (mut app, _store) = make_app(catalog());
    app.set_page(Page::Products);
    settle_catalog(&mut app).await;
    app.add_selected_to_cart();

    app.set_page(Page::Cart);
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.cart().items()[0].quantity, 1);

    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.cart().items()[0].quantity, 3);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.cart().is_empty());
    assert_eq!(
        toast(&app),
        Some(("Mug removed from cart.".to_string(), Severity::Info))
    );
}

#[tokio::test(start_paused = true)]
async fn typed_quantity_is_applied_and_clamped() {
    let (mut app, _store) = make_app(catalog());
    app.set_page(Page::Products);
    settle_catalog(&mut app).await;
    app.add_selected_to_cart();
    app.set_page(Page::Cart);

    press(&mut app, KeyCode::Char('e'));
    assert!(app.is_editing_quantity());
    assert!(app.is_text_input_active());
    type_text(&mut app, "5");
    assert_eq!(app.page(), Page::Cart);
    press(&mut app, KeyCode::Enter);
    assert!(!app.is_editing_quantity());
    assert_eq!(app.cart().items()[0].quantity, 5);

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "0");
    assert!(screen_text(&app).contains("Quantity: 0"));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cart().items()[0].quantity, 1);
}

#[tokio::test(start_paused = true)]
async fn empty_or_cancelled_quantity_entry() {
    let (mut app, _store) = make_app(catalog());
    app.set_page(Page::Products);
    settle_catalog(&mut app).await;
    app.add_selected_to_cart();
    app.set_page(Page::Cart);
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.cart().items()[0].quantity, 3);

    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "7x");
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_editing_quantity());
    assert_eq!(app.cart().items()[0].quantity, 3);

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "9");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cart().items()[0].quantity, 1);

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.page(), Page::Profile);
    assert!(!app.is_editing_quantity());
}

#[tokio::test(start_paused = true)]
async fn quantity_entry_needs_items() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.set_page(Page::Cart);
    press(&mut app, KeyCode::Char('e'));
    assert!(!app.is_editing_quantity());
}

#[tokio::test(start_paused = true)]
async fn clear_cart_notifies_once() {
    let (mut app, _store) = make_app(catalog());
    app.set_page(Page::Products);
    settle_catalog(&mut app).await;
    app.add_selected_to_cart();
    app.set_page(Page::Cart);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.cart().is_empty());
    assert_eq!(toast(&app), Some(("Cart cleared.".to_string(), Severity::Info)));
}

#[tokio::test(start_paused = true)]
async fn login_requires_username() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.page(), Page::Profile);
    assert!(app.is_text_input_active());

    press(&mut app, KeyCode::Enter);
    assert!(!app.auth().is_authenticated());
    assert_eq!(
        toast(&app),
        Some(("Please enter a username".to_string(), Severity::Error))
    );

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);
    let user = app.auth().user().expect("signed in");
    assert_eq!(user.id, FAKE_USER_ID);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, DEFAULT_EMAIL);
    assert_eq!(toast(&app), Some(("Welcome, Ada!".to_string(), Severity::Success)));
    assert!(screen_text(&app).contains("Ada"));

    press(&mut app, KeyCode::Char('l'));
    assert!(!app.auth().is_authenticated());
    assert_eq!(
        toast(&app),
        Some(("You have been logged out.".to_string(), Severity::Info))
    );
}

#[tokio::test(start_paused = true)]
async fn digits_are_typed_not_navigated_while_logging_in() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.set_page(Page::Profile);

    type_text(&mut app, "r2d2");
    assert_eq!(app.page(), Page::Profile);
    assert_eq!(app.login_form().value("username"), "r2d2");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.login_form().value("username"), "r2d");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.page(), Page::Demo);
}

#[tokio::test(start_paused = true)]
async fn demo_name_is_persisted() {
    let (mut app, store) = make_app(ScriptedRetriever::new());
    app.set_page(Page::Demo);
    assert_eq!(app.demo_name(), "Guest");

    press(&mut app, KeyCode::Char('e'));
    assert!(app.is_editing_name());
    for _ in 0.."Guest".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Lin");
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_editing_name());

    assert_eq!(store.get(DEMO_NAME_KEY).as_deref(), Some("\"Lin\""));

    let reopened = make_app_with_store(ScriptedRetriever::new(), store);
    assert_eq!(reopened.demo_name(), "Lin");
}

#[tokio::test(start_paused = true)]
async fn demo_toggle_and_size() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.set_page(Page::Demo);
    app.on_resize(120, 40);

    press(&mut app, KeyCode::Char('t'));
    assert!(app.demo_toggle());
    let screen = screen_text(&app);
    assert!(screen.contains("120 × 40"));
    assert!(screen.contains("The toggle is on."));
}

#[tokio::test(start_paused = true)]
async fn notification_disappears_after_timeout() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.notify("Heads up", Severity::Warning);
    assert!(screen_text(&app).contains("Heads up"));

    tokio::time::sleep(Duration::from_millis(3100)).await;
    app.on_tick();
    // Fading out: no longer drawn.
    assert!(matches!(app.notification(), NotificationState::FadingOut { .. }));
    assert!(!screen_text(&app).contains("Heads up"));

    tokio::time::sleep(Duration::from_millis(300)).await;
    app.on_tick();
    assert!(app.notification().is_hidden());
}

#[tokio::test(start_paused = true)]
async fn escape_dismisses_notification() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.notify("Closable", Severity::Info);
    press(&mut app, KeyCode::Esc);
    assert!(!app.notification().is_visible());
}

#[tokio::test(start_paused = true)]
async fn quit_keys() {
    let (mut app, _store) = make_app(ScriptedRetriever::new());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let (mut app, _store) = make_app(ScriptedRetriever::new());
    app.set_page(Page::Profile);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}
