//! Main render/view function (View in TEA pattern)


use cex_app::state::AppState;
use cex_core::Route;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets::FooterMode;
use crate::{layout, widgets};

fn footer_mode(state: &AppState) -> FooterMode {
    match &state.route {
        Route::Home => {
            let listing = &state.listing;
            FooterMode::Listing {
                page: listing.pagination.page(),
                page_count: listing.pagination.page_count(listing.total()),
                has_previous: listing.has_previous(),
                has_next: listing.has_next(),
            }
        }
        Route::Country(_) => FooterMode::Detail {
            loaded: state.detail.as_ref().is_some_and(|d| d.detail().is_some()),
        },
    }
}

/// Render the complete UI (View function in TEA).
///
/// Pure: reads the state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.route, &state.api_url),
        areas.header,
    );

    match &state.route {
        Route::Home => {
            frame.render_widget(widgets::CountryList::new(&state.listing), areas.body);
        }
        Route::Country(_) => {
            // Detail state is set whenever a Country route is entered
            if let Some(detail) = &state.detail {
                frame.render_widget(widgets::CountryDetailView::new(detail), areas.body);
            }
        }
    }

    frame.render_widget(
        widgets::PageNav::new(footer_mode(state)).show_hints(state.settings.ui.show_key_hints),
        areas.footer,
    );
}
