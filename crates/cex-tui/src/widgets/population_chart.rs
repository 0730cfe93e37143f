//! Population-over-time line chart, or a no-data panel

use cex_core::{ChartData, PopulationSeries};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const NO_DATA_MESSAGE: &str = "No population data available";

/// Short human form of a population count (`5.4M`, `812.3K`)
pub fn format_population(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

/// First, middle and last year labels; the axis spaces them evenly.
fn x_labels(chart: &ChartData) -> Vec<String> {
    match chart.labels.len() {
        0 => Vec::new(),
        1 | 2 => chart.labels.clone(),
        n => vec![
            chart.labels[0].clone(),
            chart.labels[n / 2].clone(),
            chart.labels[n - 1].clone(),
        ],
    }
}

fn y_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format_population(bounds[0]),
        format_population(mid),
        format_population(bounds[1]),
    ]
}

pub struct PopulationChart<'a> {
    series: &'a PopulationSeries,
}

impl<'a> PopulationChart<'a> {
    pub fn new(series: &'a PopulationSeries) -> Self {
        Self { series }
    }
}

impl Widget for PopulationChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(chart) = self.series.chart() else {
            let block = styles::titled_block("Population", false);
            let inner = block.inner(area);
            block.render(area, buf);

            let [_, row, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            Paragraph::new(Span::styled(NO_DATA_MESSAGE, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(row, buf);
            return;
        };

        let title = format!("Population ({} points)", chart.len());
        let x_bounds = chart.x_bounds();
        let y_bounds = chart.y_bounds();

        let dataset = Dataset::default()
            .name("Population")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette::CHART_LINE))
            .data(&chart.points);

        Chart::new(vec![dataset])
            .block(styles::titled_block(&title, false))
            .x_axis(
                Axis::default()
                    .title(Span::styled("Year", styles::text_muted()))
                    .style(styles::text_muted())
                    .bounds(x_bounds)
                    .labels(x_labels(&chart)),
            )
            .y_axis(
                Axis::default()
                    .style(styles::text_muted())
                    .bounds(y_bounds)
                    .labels(y_labels(y_bounds)),
            )
            .legend_position(None)
            .render(area, buf);
    }
}
