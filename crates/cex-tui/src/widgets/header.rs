//! Header bar showing the app title, current route and service URL

use cex_core::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct MainHeader<'a> {
    route: &'a Route,
    api_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(route: &'a Route, api_url: &'a str) -> Self {
        Self { route, api_url }
    }

    fn location(&self) -> String {
        match self.route {
            Route::Home => "Countries".to_string(),
            Route::Country(code) => format!("Countries / {}", code),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("Country Explorer", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.location(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Service URL on the right, only when it fits next to the title
        let url_width = self.api_url.width() as u16;
        if !self.api_url.is_empty() && left_width + url_width + 3 <= inner.width {
            let x = inner.x + inner.width - url_width - 1;
            buf.set_string(x, inner.y, self.api_url, styles::text_muted());
        }
    }
}
