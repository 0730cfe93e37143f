use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub const BACK_HOME_LABEL: &str = "[ Back to Home Page ]";

/// Failed Detail View: the error text and a way back to the listing
pub struct ErrorPanel<'a> {
    message: &'a str,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Error", true).border_style(styles::status_red());
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let lines = vec![
            Line::from(Span::styled(self.message, styles::status_red())),
            Line::from(""),
            Line::from(Span::styled(BACK_HOME_LABEL, styles::focused_selected())),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to go back", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cex_app::state::DETAIL_ERROR_MESSAGE;

    #[test]
    fn test_shows_message_and_home_control() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ErrorPanel::new(DETAIL_ERROR_MESSAGE), area);

        assert!(term.buffer_contains("Failed to fetch country information"));
        assert!(term.buffer_contains(BACK_HOME_LABEL));
        assert!(term.buffer_contains("Enter to go back"));
    }
}
