//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Page navigation bar rows
pub const FOOTER_HEIGHT: u16 = 3;

/// Rows the country list loses to its own border
pub const LIST_BORDER_HEIGHT: u16 = 2;

/// Rows of the detail summary box (border + name + flag + code)
pub const DETAIL_INFO_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Listing or detail content
    pub body: Rect,

    /// Page navigation and key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas inside the Detail View body
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    pub info: Rect,
    pub borders: Rect,
    pub chart: Rect,
}

/// Split the detail body: summary, border grid (`border_rows` rows of
/// links), then the chart in whatever is left.
pub fn detail(body: Rect, border_rows: u16) -> DetailAreas {
    let borders_height = border_rows.max(1) + 2;
    let chunks = Layout::vertical([
        Constraint::Length(DETAIL_INFO_HEIGHT),
        Constraint::Length(borders_height),
        Constraint::Min(0),
    ])
    .split(body);

    DetailAreas {
        info: chunks[0],
        borders: chunks[1],
        chart: chunks[2],
    }
}
