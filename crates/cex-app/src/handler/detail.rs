//! Detail View handlers: fetch results and border selection

use cex_api::ApiError;
use cex_core::prelude::*;
use cex_core::{CountryCode, CountryDetail, Route};

use crate::message::Message;
use crate::state::{AppState, DetailStatus, RequestId, DETAIL_ERROR_MESSAGE};

use super::{navigation::enter_route, UpdateResult};

/// Re-issue the detail request for the current country route
pub fn reload(state: &mut AppState) -> UpdateResult {
    if state.route.is_home() {
        return UpdateResult::none();
    }
    let route = state.route.clone();
    enter_route(state, route)
}

pub fn handle_country_loaded(
    state: &mut AppState,
    request_id: RequestId,
    detail: Box<CountryDetail>,
) -> UpdateResult {
    let Some(current) = state.detail.as_mut().filter(|d| d.request_id == request_id) else {
        debug!(
            "Discarding stale detail response {} for {}",
            request_id, detail.code
        );
        return UpdateResult::none();
    };

    debug!(
        "Loaded {} ({} borders, {} population points)",
        detail.code,
        detail.borders.len(),
        detail.population.len()
    );
    current.status = DetailStatus::Loaded {
        detail,
        selected_border: 0,
    };
    UpdateResult::none()
}

pub fn handle_country_failed(
    state: &mut AppState,
    request_id: RequestId,
    code: CountryCode,
    error: ApiError,
) -> UpdateResult {
    let Some(current) = state.detail.as_mut().filter(|d| d.request_id == request_id) else {
        debug!("Discarding stale detail failure {} for {}", request_id, code);
        return UpdateResult::none();
    };

    error!("Failed to fetch country info for {}: {}", code, error);
    current.status = DetailStatus::Failed(DETAIL_ERROR_MESSAGE.to_string());
    UpdateResult::none()
}

pub fn select_next_border(state: &mut AppState) -> UpdateResult {
    if let Some(DetailStatus::Loaded {
        detail,
        selected_border,
    }) = state.detail.as_mut().map(|d| &mut d.status)
    {
        if *selected_border + 1 < detail.borders.len() {
            *selected_border += 1;
        }
    }
    UpdateResult::none()
}

pub fn select_previous_border(state: &mut AppState) -> UpdateResult {
    if let Some(DetailStatus::Loaded {
        selected_border, ..
    }) = state.detail.as_mut().map(|d| &mut d.status)
    {
        *selected_border = selected_border.saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn open_selected_border(state: &mut AppState) -> UpdateResult {
    let Some(DetailStatus::Loaded {
        detail,
        selected_border,
    }) = state.detail.as_ref().map(|d| &d.status)
    else {
        return UpdateResult::none();
    };

    match detail.borders.get(*selected_border) {
        Some(border) => {
            UpdateResult::message(Message::Navigate(Route::Country(border.code.clone())))
        }
        None => UpdateResult::none(),
    }
}
