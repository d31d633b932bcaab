use crate::ui::page::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    page: Page,
    text_input: bool,
}

impl Footer {
    pub fn new(page: Page, text_input: bool) -> Self {
        Self { page, text_input }
    }

    /// Key hints for the current page.
    pub fn hints(&self) -> &'static str {
        if self.text_input {
            return " Type to edit │ Enter: Submit │ Esc: Cancel │ Tab: Next page │ Ctrl+Q: Quit";
        }
        match self.page {
            Page::Home => " Tab/1-5: Pages │ x: Close toast │ q: Quit",
            Page::Products => " ↑/↓: Select │ a/Enter: Add to cart │ r: Reload │ Tab: Pages │ q: Quit",
            Page::Cart => " ↑/↓: Select │ +/-: Quantity │ e: Set qty │ d: Remove │ c: Clear │ Tab: Pages │ q: Quit",
            Page::Profile => " l: Log out │ Tab: Pages │ q: Quit",
            Page::Demo => " t: Toggle │ e: Edit name │ Tab: Pages │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
