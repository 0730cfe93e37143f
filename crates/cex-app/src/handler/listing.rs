//! Listing View handlers: fetch results, paging and row selection

use cex_api::ApiError;
use cex_core::prelude::*;
use cex_core::{CountrySummary, Route};

use crate::message::Message;
use crate::state::{AppState, ListingStatus, LoadingState, RequestId};

use super::{UpdateAction, UpdateResult};

/// Issue the listing request unless one is already in flight
pub fn load_countries(state: &mut AppState) -> UpdateResult {
    if state.listing.is_loading() {
        return UpdateResult::none();
    }

    let request_id = state.next_request_id();
    state.listing.request_id = Some(request_id);
    state.listing.status = ListingStatus::Loading(LoadingState::new("Loading countries..."));
    UpdateResult::action(UpdateAction::FetchCountries { request_id })
}

pub fn handle_countries_loaded(
    state: &mut AppState,
    request_id: RequestId,
    countries: Vec<CountrySummary>,
) -> UpdateResult {
    if state.listing.request_id != Some(request_id) {
        debug!("Discarding stale listing response {}", request_id);
        return UpdateResult::none();
    }

    info!("Loaded {} countries", countries.len());
    let listing = &mut state.listing;
    listing.countries = countries;
    listing.status = ListingStatus::Loaded;
    let total = listing.total();
    listing.pagination.clamp(total);
    listing.clamp_selection();
    UpdateResult::none()
}

pub fn handle_countries_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: ApiError,
) -> UpdateResult {
    if state.listing.request_id != Some(request_id) {
        debug!("Discarding stale listing failure {}", request_id);
        return UpdateResult::none();
    }

    error!("Failed to load countries: {}", error);
    state.listing.status = ListingStatus::Failed(error.to_string());
    UpdateResult::none()
}

pub fn next_page(state: &mut AppState) -> UpdateResult {
    let total = state.listing.total();
    if state.listing.pagination.next(total) {
        state.listing.selected = 0;
    }
    UpdateResult::none()
}

pub fn previous_page(state: &mut AppState) -> UpdateResult {
    if state.listing.pagination.previous() {
        state.listing.selected = 0;
    }
    UpdateResult::none()
}

/// Move the highlight down, continuing onto the next page at the bottom
pub fn select_next(state: &mut AppState) -> UpdateResult {
    let listing = &mut state.listing;
    let visible = listing.visible().len();
    let total = listing.total();
    if listing.selected + 1 < visible {
        listing.selected += 1;
    } else if listing.pagination.next(total) {
        listing.selected = 0;
    }
    UpdateResult::none()
}

/// Move the highlight up, continuing onto the previous page at the top
pub fn select_previous(state: &mut AppState) -> UpdateResult {
    let listing = &mut state.listing;
    if listing.selected > 0 {
        listing.selected -= 1;
    } else if listing.pagination.previous() {
        listing.selected = listing.visible().len().saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn select_first(state: &mut AppState) -> UpdateResult {
    state.listing.selected = 0;
    UpdateResult::none()
}

pub fn select_last(state: &mut AppState) -> UpdateResult {
    state.listing.selected = state.listing.visible().len().saturating_sub(1);
    UpdateResult::none()
}

pub fn open_selected(state: &mut AppState) -> UpdateResult {
    match state.listing.selected_country() {
        Some(country) => {
            UpdateResult::message(Message::Navigate(Route::Country(country.code.clone())))
        }
        None => UpdateResult::none(),
    }
}
