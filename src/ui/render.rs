use crate::catalog::{Product, ProductSchema};
use crate::fetch::{FetchState, Retriever};
use crate::ui::app::{App, QUANTITY_FIELD, USERNAME_FIELD};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, top_right_rect};
use crate::ui::notification::NotificationState;
use crate::ui::page::Page;
use crate::ui::theme::{
    severity_color, severity_icon, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<R: Retriever>(frame: &mut Frame<'_>, app: &App<R>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let user_name = app.auth().user().map(|user| user.name.as_str());
    let header_widget = Header::new(app.page(), app.cart().total_quantity(), user_name);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let block = Block::default()
        .title(format!(" {} ", app.page().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let lines = match app.page() {
        Page::Home => home_lines(),
        Page::Products => product_lines(app),
        Page::Cart => cart_lines(app),
        Page::Profile => profile_lines(app),
        Page::Demo => demo_lines(app),
    };
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        body,
    );

    let footer_widget = Footer::new(app.page(), app.is_text_input_active());
    frame.render_widget(footer_widget.widget(footer), footer);

    draw_notification(frame, app.notification(), body);
}

fn home_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Welcome to Shopfront",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Browse the catalog, fill your cart and sign in from the profile page."),
        Line::from(""),
        Line::from(Span::styled(
            "Press 2 to see the products.",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

fn product_lines<R: Retriever>(app: &App<R>) -> Vec<Line<'static>> {
    match app.catalog_state() {
        FetchState::Idle => vec![Line::from(Span::styled(
            "No catalog configured.",
            Style::default().fg(MUTED_TEXT),
        ))],
        FetchState::Loading => vec![Line::from(Span::styled(
            "Loading products...",
            Style::default().fg(MUTED_TEXT),
        ))],
        FetchState::Failed(message) => vec![
            Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled("Press r to retry.", Style::default().fg(MUTED_TEXT))),
        ],
        FetchState::Loaded(products) if products.is_empty() => {
            vec![Line::from("The catalog is empty.")]
        }
        FetchState::Loaded(products) => products
            .iter()
            .enumerate()
            .map(|(idx, product)| {
                product_line(app.schema(), product, idx == app.product_selection())
            })
            .collect(),
    }
}

fn product_line(schema: &ProductSchema, product: &Product, selected: bool) -> Line<'static> {
    let base = if selected {
        Style::default().bg(ACTIVE_HIGHLIGHT).fg(HEADER_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if selected { "▶ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, base.fg(ACCENT)),
        Span::styled(schema.display_title(product), base.add_modifier(Modifier::BOLD)),
    ];
    if let Some(price) = schema.price(product) {
        spans.push(Span::styled(format!("  {}", format_price(price)), base.fg(STATUS_OK)));
    }
    if let Some(rating) = schema.rating(product) {
        spans.push(Span::styled(format!("  ★ {:.1}", rating), base.fg(MUTED_TEXT)));
    }
    Line::from(spans)
}

fn cart_lines<R: Retriever>(app: &App<R>) -> Vec<Line<'static>> {
    let cart = app.cart();
    if cart.is_empty() {
        return vec![Line::from(Span::styled(
            "Your cart is empty.",
            Style::default().fg(MUTED_TEXT),
        ))];
    }

    let schema = app.schema();
    let mut lines: Vec<Line<'static>> = cart
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let selected = idx == app.cart_selection();
            let base = if selected {
                Style::default().bg(ACTIVE_HIGHLIGHT).fg(HEADER_TEXT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            let marker = if selected { "▶ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, base.fg(ACCENT)),
                Span::styled(format!("{} × ", item.quantity), base),
                Span::styled(schema.display_title(&item.product), base.add_modifier(Modifier::BOLD)),
            ];
            if let Some(price) = schema.price(&item.product) {
                spans.push(Span::styled(
                    format!("  {}", format_price(price * f64::from(item.quantity))),
                    base.fg(STATUS_OK),
                ));
            }
            Line::from(spans)
        })
        .collect();

    if app.is_editing_quantity() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Quantity: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{}▏", app.quantity_form().value(QUANTITY_FIELD)),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("Items: {}", cart.total_quantity()),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            format!("   Subtotal: {}", format_price(cart.subtotal(schema))),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn profile_lines<R: Retriever>(app: &App<R>) -> Vec<Line<'static>> {
    if let Some(user) = app.auth().user() {
        return vec![
            Line::from(Span::styled(
                format!("Signed in as {}", user.name),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Email: {}", user.email)),
            Line::from(format!("User id: {}", user.id)),
            Line::from(""),
            Line::from(Span::styled("Press l to log out.", Style::default().fg(MUTED_TEXT))),
        ];
    }

    let username = app.login_form().value(USERNAME_FIELD);
    vec![
        Line::from("Sign in"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Username: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(format!("{}▏", username), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press Enter to log in.", Style::default().fg(MUTED_TEXT))),
    ]
}

fn demo_lines<R: Retriever>(app: &App<R>) -> Vec<Line<'static>> {
    let size = match app.size() {
        Some((cols, rows)) => format!("{} × {}", cols, rows),
        None => "unknown".to_string(),
    };
    let cursor = if app.is_editing_name() { "▏" } else { "" };
    let mut lines = vec![
        Line::from(format!("Window size: {}", size)),
        Line::from(vec![
            Span::styled("Stored name: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{}{}", app.demo_name(), cursor),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Hello, {}!", app.demo_name())),
        Line::from(""),
    ];
    if app.demo_toggle() {
        lines.push(Line::from(Span::styled(
            "The toggle is on.",
            Style::default().fg(STATUS_OK),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "The toggle is off.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines
}

/// The toast is only drawn while visible; it disappears as soon as it
/// starts fading out.
fn draw_notification(frame: &mut Frame<'_>, state: &NotificationState, area: Rect) {
    let NotificationState::Visible { notification, .. } = state else {
        return;
    };
    let color = severity_color(notification.severity);
    let text = format!("{} {}", severity_icon(notification.severity), notification.message);
    let width = u16::try_from(text.chars().count() + 4).unwrap_or(u16::MAX);
    let rect = top_right_rect(area, width.max(20), 3);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        rect,
    );
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
