//! Footer bar: page navigation controls on the listing, key hints everywhere
//!
//! Previous/Next controls are drawn only when the move is possible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub const PREVIOUS_LABEL: &str = "◀ Previous";
pub const NEXT_LABEL: &str = "Next ▶";

/// What the footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    /// Page controls for the listing
    Listing {
        page: usize,
        page_count: usize,
        has_previous: bool,
        has_next: bool,
    },
    /// Detail View (no page controls)
    Detail { loaded: bool },
}

pub struct PageNav {
    mode: FooterMode,
    show_hints: bool,
}

impl PageNav {
    pub fn new(mode: FooterMode) -> Self {
        Self {
            mode,
            show_hints: true,
        }
    }

    pub fn show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            FooterMode::Listing { .. } => vec![
                ("↑↓", "select"),
                ("←→", "page"),
                ("Enter", "open"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            FooterMode::Detail { loaded: true } => vec![
                ("←→", "border"),
                ("Enter", "open"),
                ("Esc", "back"),
                ("h", "home"),
                ("q", "quit"),
            ],
            FooterMode::Detail { loaded: false } => {
                vec![("Esc", "back"), ("h", "home"), ("q", "quit")]
            }
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for PageNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let listing = matches!(self.mode, FooterMode::Listing { .. });
        let mut block = styles::glass_block(false);
        // Listing controls own the inner row, so hints sit on the bottom border
        if self.show_hints && listing {
            block = block.title_bottom(self.hint_line().right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let FooterMode::Listing {
            page,
            page_count,
            has_previous,
            has_next,
        } = self.mode
        else {
            if self.show_hints {
                let hints = self.hint_line();
                buf.set_line(inner.x + 1, inner.y, &hints, inner.width.saturating_sub(1));
            }
            return;
        };

        let mut left_edge = inner.x + 1;
        let mut right_edge = inner.right().saturating_sub(1);

        if has_previous {
            buf.set_string(left_edge, inner.y, PREVIOUS_LABEL, styles::link());
            left_edge += Line::from(PREVIOUS_LABEL).width() as u16 + 2;
        }
        if has_next {
            let width = Line::from(NEXT_LABEL).width() as u16;
            let x = right_edge.saturating_sub(width);
            buf.set_string(x, inner.y, NEXT_LABEL, styles::link());
            right_edge = x.saturating_sub(2);
        }

        let label = format!("Page {} of {}", page, page_count.max(1));
        let label_width = label.len() as u16;
        let center = inner.x + inner.width.saturating_sub(label_width) / 2;
        if center >= left_edge && center + label_width <= right_edge {
            buf.set_string(center, inner.y, &label, styles::text_secondary());
        }
    }
}
