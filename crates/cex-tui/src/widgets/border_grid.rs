//! Grid of border-country links on the Detail View

use cex_core::BorderCountry;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Columns per grid cell, including the gap
pub const CELL_WIDTH: u16 = 24;

pub struct BorderGrid<'a> {
    borders: &'a [BorderCountry],
    selected: usize,
}

impl<'a> BorderGrid<'a> {
    pub fn new(borders: &'a [BorderCountry], selected: usize) -> Self {
        Self { borders, selected }
    }

    /// Cells per row for an outer width (block borders included)
    pub fn columns(outer_width: u16) -> usize {
        (outer_width.saturating_sub(2) / CELL_WIDTH).max(1) as usize
    }

    /// Topmost grid row drawn, scrolled so the selected cell stays on screen
    fn first_visible_row(selected: usize, columns: usize, height: u16) -> usize {
        let selected_row = selected / columns.max(1);
        selected_row.saturating_sub((height as usize).saturating_sub(1))
    }

    /// Rows needed to show `count` links at `outer_width`
    pub fn rows_needed(count: usize, outer_width: u16) -> u16 {
        count.div_ceil(Self::columns(outer_width)) as u16
    }
}

impl Widget for BorderGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Borders ({})", self.borders.len());
        let block = styles::titled_block(&title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.borders.is_empty() {
            Paragraph::new(Span::styled("No bordering countries", styles::text_muted()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let columns = Self::columns(area.width);
        let cell_text = CELL_WIDTH.saturating_sub(2) as usize;
        let first_row = Self::first_visible_row(self.selected, columns, inner.height);
        let visible = self
            .borders
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(inner.height as usize * columns);

        for (i, border) in visible {
            let row = (i / columns - first_row) as u16;
            let col = (i % columns) as u16;

            let x = inner.x + col * CELL_WIDTH;
            let y = inner.y + row;
            let style = if i == self.selected {
                styles::focused_selected()
            } else {
                styles::link()
            };
            let max_width = cell_text.min(inner.right().saturating_sub(x) as usize);
            let label = format!(" {} ", border.common_name);
            buf.set_stringn(x, y, label, max_width, style);
        }
    }
}
