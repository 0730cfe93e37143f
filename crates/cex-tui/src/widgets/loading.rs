//! Spinner shown while a request is in flight

use cex_app::state::LoadingState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Braille spinner characters for smooth animation
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for an animation counter
pub fn spinner_frame(animation_frame: u64) -> &'static str {
    SPINNER[(animation_frame % SPINNER.len() as u64) as usize]
}

/// Centered spinner and message inside a glass block
pub struct LoadingIndicator<'a> {
    loading: &'a LoadingState,
    title: &'a str,
}

impl<'a> LoadingIndicator<'a> {
    pub fn new(loading: &'a LoadingState, title: &'a str) -> Self {
        Self { loading, title }
    }
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(self.title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let line = Line::from(vec![
            Span::styled(spinner_frame(self.loading.animation_frame), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.loading.message.as_str(), styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
