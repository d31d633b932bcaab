use crate::ui::page::Page;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page tabs, cart badge and the signed-in user.
pub struct Header<'a> {
    page: Page,
    cart_count: u64,
    user_name: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(page: Page, cart_count: u64, user_name: Option<&'a str>) -> Self {
        Self {
            page,
            cart_count,
            user_name,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Shopfront", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];

        for (idx, page) in Page::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            let label = format!("{} {}", page.key(), page.title());
            let style = if page == self.page {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(label, style));
        }

        spans.push(Span::styled("  │  ", separator_style));
        let cart_label = if self.cart_count > 0 {
            format!("🛒 {}", self.cart_count)
        } else {
            "🛒".to_string()
        };
        spans.push(Span::styled(cart_label, text_style));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            self.user_name.unwrap_or("Login").to_string(),
            text_style,
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
