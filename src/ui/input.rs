use crate::fetch::Retriever;
use crate::ui::app::App;
use crate::ui::page::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<R: Retriever>(app: &mut App<R>, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_page();
            return;
        }
        KeyCode::BackTab => {
            app.prev_page();
            return;
        }
        _ => {}
    }

    if app.is_text_input_active() {
        handle_text_input(app, key);
        return;
    }

    if let KeyCode::Char(ch) = key.code {
        if let Some(page) = Page::from_key(ch) {
            app.set_page(page);
            return;
        }
        match ch {
            'q' => {
                app.request_quit();
                return;
            }
            'x' => {
                app.dismiss_notification();
                return;
            }
            _ => {}
        }
    }
    if key.code == KeyCode::Esc {
        app.dismiss_notification();
        return;
    }

    match app.page() {
        Page::Home => {}
        Page::Products => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_product_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_product_selection(1),
            KeyCode::Enter | KeyCode::Char('a') => {
                app.add_selected_to_cart();
            }
            KeyCode::Char('r') => app.refresh_catalog(),
            _ => {}
        },
        Page::Cart => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_cart_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_cart_selection(1),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                app.adjust_selected_quantity(1)
            }
            KeyCode::Char('-') | KeyCode::Left => app.adjust_selected_quantity(-1),
            KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
            KeyCode::Char('c') => app.clear_cart(),
            KeyCode::Char('e') | KeyCode::Enter => app.start_editing_quantity(),
            _ => {}
        },
        Page::Profile => {
            if key.code == KeyCode::Char('l') {
                app.logout();
            }
        }
        Page::Demo => match key.code {
            KeyCode::Char('t') => app.toggle_demo_message(),
            KeyCode::Char('e') | KeyCode::Enter => app.start_editing_name(),
            _ => {}
        },
    }
}

fn handle_text_input<R: Retriever>(app: &mut App<R>, key: KeyEvent) {
    if app.page() == Page::Cart {
        handle_quantity_input(app, key);
        return;
    }
    let editing_name = app.page() == Page::Demo;
    match key.code {
        KeyCode::Esc => {
            if editing_name {
                app.stop_editing_name();
            } else {
                app.dismiss_notification();
            }
        }
        KeyCode::Enter => {
            if editing_name {
                app.stop_editing_name();
            } else {
                app.submit_login();
            }
        }
        KeyCode::Backspace => {
            if editing_name {
                app.backspace_name();
            } else {
                app.backspace_username();
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if editing_name {
                app.type_name(ch);
            } else {
                app.type_username(ch);
            }
        }
        _ => {}
    }
}

fn handle_quantity_input<R: Retriever>(app: &mut App<R>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_quantity_edit(),
        KeyCode::Enter => app.submit_quantity(),
        KeyCode::Backspace => app.backspace_quantity(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_quantity(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
