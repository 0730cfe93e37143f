//! Detail View body for one country
//!
//! Loaded: summary box, border grid, population chart (stacked).
//! Loading and failed states take the whole body.

use cex_app::state::{DetailState, DetailStatus};
use cex_core::CountryDetail;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

use super::{BorderGrid, ErrorPanel, LoadingIndicator, PopulationChart};

pub struct CountryDetailView<'a> {
    state: &'a DetailState,
}

impl<'a> CountryDetailView<'a> {
    pub fn new(state: &'a DetailState) -> Self {
        Self { state }
    }
}

fn render_info(detail: &CountryDetail, area: Rect, buf: &mut Buffer) {
    let block = styles::titled_block(&detail.common_name, true);
    let inner = block.inner(area);
    block.render(area, buf);

    let flag = match &detail.flag_url {
        Some(url) => Line::from(vec![
            Span::styled("Flag: ", styles::text_muted()),
            Span::styled(url.as_str(), styles::text_secondary()),
        ]),
        None => Line::from(Span::styled("No flag available", styles::text_muted())),
    };

    let lines = vec![
        Line::from(Span::styled(detail.common_name.as_str(), styles::accent_bold())),
        flag,
        Line::from(vec![
            Span::styled("Code: ", styles::text_muted()),
            Span::styled(detail.code.as_str(), styles::text_primary()),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}

impl Widget for CountryDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state.status {
            DetailStatus::Loading(loading) => {
                LoadingIndicator::new(loading, "Country").render(area, buf);
            }
            DetailStatus::Failed(message) => {
                ErrorPanel::new(message).render(area, buf);
            }
            DetailStatus::Loaded {
                detail,
                selected_border,
            } => {
                let rows = BorderGrid::rows_needed(detail.borders.len(), area.width);
                let areas = layout::detail(area, rows);

                render_info(detail, areas.info, buf);
                BorderGrid::new(&detail.borders, *selected_border).render(areas.borders, buf);
                PopulationChart::new(&detail.population).render(areas.chart, buf);
            }
        }
    }
}
