//! Listing View body: the current page of countries, or its load state

use cex_app::state::{ListingState, ListingStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

use super::LoadingIndicator;

/// Width reserved for the country code column
const CODE_COLUMN: u16 = 6;

pub struct CountryList<'a> {
    listing: &'a ListingState,
}

impl<'a> CountryList<'a> {
    pub fn new(listing: &'a ListingState) -> Self {
        Self { listing }
    }

    fn title(&self) -> String {
        match self.listing.status {
            ListingStatus::Loaded => format!("Countries ({})", self.listing.total()),
            _ => "Countries".to_string(),
        }
    }

    fn render_rows(&self, inner: Rect, buf: &mut Buffer) {
        let visible = self.listing.visible();
        if visible.is_empty() {
            let text = if self.listing.total() == 0 {
                "No countries available"
            } else {
                "Window too small to show countries"
            };
            Paragraph::new(Span::styled(text, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let name_width = inner.width.saturating_sub(CODE_COLUMN + 3);
        for (i, country) in visible.iter().enumerate().take(inner.height as usize) {
            let y = inner.y + i as u16;
            let selected = i == self.listing.selected;

            let row = Rect::new(inner.x, y, inner.width, 1);
            if selected {
                buf.set_style(row, styles::focused_selected());
            }

            let (marker, name_style, code_style) = if selected {
                (
                    "▶",
                    styles::focused_selected(),
                    styles::focused_selected(),
                )
            } else {
                (" ", styles::text_primary(), styles::text_muted())
            };

            buf.set_string(inner.x, y, marker, name_style);
            buf.set_stringn(
                inner.x + 2,
                y,
                &country.name,
                name_width as usize,
                name_style,
            );

            let code = country.code.as_str();
            let code_x = inner.x + inner.width.saturating_sub(code.width() as u16 + 1);
            if code_x > inner.x + 2 {
                buf.set_string(code_x, y, code, code_style);
            }
        }
    }
}

impl Widget for CountryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let ListingStatus::Loading(loading) = &self.listing.status {
            LoadingIndicator::new(loading, "Countries").render(area, buf);
            return;
        }

        let block = styles::titled_block(&self.title(), true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match &self.listing.status {
            ListingStatus::Failed(error) => {
                let lines = vec![
                    Line::from(Span::styled("Failed to load countries", styles::status_red())),
                    Line::from(Span::styled(error.as_str(), styles::text_muted())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Press ", styles::text_secondary()),
                        Span::styled("r", styles::keybinding()),
                        Span::styled(" to retry", styles::text_secondary()),
                    ]),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            ListingStatus::Idle => {}
            _ => self.render_rows(inner, buf),
        }
    }
}
