//! Route changes and navigation history

use cex_core::prelude::*;
use cex_core::Route;

use crate::message::Message;
use crate::state::{AppState, DetailState, ListingStatus};

use super::{UpdateAction, UpdateResult};

/// Switch to `route`, remembering the current route for `GoBack`
pub fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    if route != state.route {
        let previous = state.route.clone();
        state.push_history(previous);
    }
    enter_route(state, route)
}

/// Return to the most recent route in history (Home when history is empty)
pub fn go_back(state: &mut AppState) -> UpdateResult {
    match state.history.pop() {
        Some(route) => enter_route(state, route),
        None if !state.route.is_home() => enter_route(state, Route::Home),
        None => UpdateResult::none(),
    }
}

/// Return to the listing and forget history
pub fn go_home(state: &mut AppState) -> UpdateResult {
    state.history.clear();
    if state.route.is_home() && state.detail.is_none() {
        return UpdateResult::none();
    }
    enter_route(state, Route::Home)
}

/// Make `route` current and start whatever fetch it needs.
///
/// A country route always issues a fresh detail request; any response for
/// an earlier request becomes stale. The listing is fetched once and only
/// requested again here if it never was.
pub(super) fn enter_route(state: &mut AppState, route: Route) -> UpdateResult {
    debug!("Route: {} -> {}", state.route, route);
    state.route = route.clone();

    match route {
        Route::Home => {
            state.detail = None;
            if state.listing.status == ListingStatus::Idle {
                UpdateResult::message(Message::LoadCountries)
            } else {
                UpdateResult::none()
            }
        }
        Route::Country(code) => {
            let request_id = state.next_request_id();
            state.detail = Some(DetailState::loading(code.clone(), request_id));
            UpdateResult::action(UpdateAction::FetchCountry { request_id, code })
        }
    }
}
