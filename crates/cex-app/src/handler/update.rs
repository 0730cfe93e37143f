//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, Viewport};

use super::{detail, keys::handle_key, listing, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_loading();
            UpdateResult::none()
        }

        Message::Resize { width, height } => {
            state.viewport = Viewport { width, height };
            if state.uses_viewport_page_size() {
                let page_size = state.effective_page_size();
                state.listing.set_page_size(page_size);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::navigate(state, route),
        Message::GoBack => navigation::go_back(state),
        Message::GoHome => navigation::go_home(state),

        // ─────────────────────────────────────────────────────────
        // Listing Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCountries => listing::load_countries(state),
        Message::CountriesLoaded {
            request_id,
            countries,
        } => listing::handle_countries_loaded(state, request_id, countries),
        Message::CountriesLoadFailed { request_id, error } => {
            listing::handle_countries_failed(state, request_id, error)
        }
        Message::NextPage => listing::next_page(state),
        Message::PreviousPage => listing::previous_page(state),
        Message::SelectNextCountry => listing::select_next(state),
        Message::SelectPreviousCountry => listing::select_previous(state),
        Message::SelectFirstCountry => listing::select_first(state),
        Message::SelectLastCountry => listing::select_last(state),
        Message::OpenSelectedCountry => listing::open_selected(state),

        // ─────────────────────────────────────────────────────────
        // Detail Messages
        // ─────────────────────────────────────────────────────────
        Message::ReloadCountry => detail::reload(state),
        Message::CountryLoaded { request_id, detail } => {
            detail::handle_country_loaded(state, request_id, detail)
        }
        Message::CountryLoadFailed {
            request_id,
            code,
            error,
        } => detail::handle_country_failed(state, request_id, code, error),
        Message::SelectNextBorder => detail::select_next_border(state),
        Message::SelectPreviousBorder => detail::select_previous_border(state),
        Message::OpenSelectedBorder => detail::open_selected_border(state),
    }
}
