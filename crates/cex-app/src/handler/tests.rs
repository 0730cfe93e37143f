//! Tests for handler module

use super::keys::handle_key;
use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{
    AppPhase, AppState, DetailStatus, ListingStatus, RequestId, DETAIL_ERROR_MESSAGE,
};
use cex_api::test_utils::{test_countries, test_detail};
use cex_api::ApiError;
use cex_core::{CountryCode, PopulationSeries, Route};

/// Run `msg` and its follow-ups through update(), collecting actions
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

/// State with `total` countries loaded and an explicit page size
fn loaded_state(total: usize, page_size: usize) -> AppState {
    let mut state = AppState::new();
    state.settings.listing.page_size = Some(page_size);
    state.listing.pagination = cex_core::Pagination::new(page_size);

    let actions = run(&mut state, Message::LoadCountries);
    let request_id = match actions.as_slice() {
        [UpdateAction::FetchCountries { request_id }] => *request_id,
        other => panic!("expected FetchCountries, got {:?}", other),
    };
    run(
        &mut state,
        Message::CountriesLoaded {
            request_id,
            countries: test_countries(total),
        },
    );
    state
}

/// Navigate to `code` and return the issued request id
fn open_country(state: &mut AppState, code: &str) -> RequestId {
    let actions = run(state, Message::Navigate(Route::country(code)));
    match actions.as_slice() {
        [UpdateAction::FetchCountry { request_id, code: c }] => {
            assert_eq!(c.as_str(), code);
            *request_id
        }
        other => panic!("expected FetchCountry, got {:?}", other),
    }
}

fn detail_status(state: &AppState) -> &DetailStatus {
    &state.detail.as_ref().expect("detail state").status
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_eq!(state.phase, AppPhase::Running);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit_from_any_view() {
    let mut state = loaded_state(3, 2);
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));

    open_country(&mut state, "NO");
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_tick_animates_listing_spinner() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadCountries);

    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);

    match &state.listing.status {
        ListingStatus::Loading(loading) => assert_eq!(loading.animation_frame, 2),
        other => panic!("expected Loading, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────

#[test]
fn test_load_countries_issues_single_fetch() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::LoadCountries);
    assert_eq!(actions.len(), 1);
    assert!(state.listing.is_loading());

    // A second request while one is in flight is ignored
    let actions = run(&mut state, Message::LoadCountries);
    assert!(actions.is_empty());
}

#[test]
fn test_countries_loaded_populates_listing() {
    let state = loaded_state(25, 10);

    assert_eq!(state.listing.status, ListingStatus::Loaded);
    assert_eq!(state.listing.total(), 25);
    assert_eq!(state.listing.visible().len(), 10);
    assert_eq!(state.listing.visible()[0].name, "Country 0");
}

#[test]
fn test_stale_listing_response_is_discarded() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadCountries);
    let current = state.listing.request_id.expect("request id");

    run(
        &mut state,
        Message::CountriesLoaded {
            request_id: RequestId::new(current.value() + 100),
            countries: test_countries(5),
        },
    );

    assert!(state.listing.countries.is_empty());
    assert!(state.listing.is_loading());
}

#[test]
fn test_listing_failure_shows_banner_and_retries() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadCountries);
    let request_id = state.listing.request_id.expect("request id");

    run(
        &mut state,
        Message::CountriesLoadFailed {
            request_id,
            error: ApiError::Network("connection refused".into()),
        },
    );

    match &state.listing.status {
        ListingStatus::Failed(message) => assert!(message.contains("connection refused")),
        other => panic!("expected Failed, got {:?}", other),
    }

    let msg = handle_key(&state, InputKey::Char('r'));
    assert!(matches!(msg, Some(Message::LoadCountries)));

    let actions = run(&mut state, Message::LoadCountries);
    match actions.as_slice() {
        [UpdateAction::FetchCountries { request_id: retry }] => assert!(*retry > request_id),
        other => panic!("expected FetchCountries, got {:?}", other),
    }
}

#[test]
fn test_next_and_previous_page() {
    let mut state = loaded_state(25, 10);

    run(&mut state, Message::NextPage);
    assert_eq!(state.listing.pagination.page(), 2);
    assert_eq!(state.listing.visible()[0].name, "Country 10");

    run(&mut state, Message::NextPage);
    assert_eq!(state.listing.pagination.page(), 3);
    assert_eq!(state.listing.visible().len(), 5);
    assert!(!state.listing.has_next());

    // No Next control on the last page
    run(&mut state, Message::NextPage);
    assert_eq!(state.listing.pagination.page(), 3);

    run(&mut state, Message::PreviousPage);
    assert_eq!(state.listing.pagination.page(), 2);
}

#[test]
fn test_paging_keys_only_when_control_shown() {
    let mut state = loaded_state(15, 10);

    assert!(handle_key(&state, InputKey::Left).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Right),
        Some(Message::NextPage)
    ));

    run(&mut state, Message::NextPage);

    assert!(handle_key(&state, InputKey::Char('n')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char('p')),
        Some(Message::PreviousPage)
    ));
}

#[test]
fn test_exact_multiple_has_no_trailing_page() {
    let mut state = loaded_state(20, 10);
    run(&mut state, Message::NextPage);
    assert_eq!(state.listing.pagination.page(), 2);
    assert!(!state.listing.has_next());
}

#[test]
fn test_resize_recomputes_page_size() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadCountries);
    let request_id = state.listing.request_id.expect("request id");
    run(
        &mut state,
        Message::CountriesLoaded {
            request_id,
            countries: test_countries(100),
        },
    );

    run(
        &mut state,
        Message::Resize {
            width: 80,
            height: 28,
        },
    );
    assert_eq!(state.listing.pagination.page_size(), 20);

    // Smaller than the reserved rows: nothing fits and no Next is offered
    run(
        &mut state,
        Message::Resize {
            width: 80,
            height: 4,
        },
    );
    assert_eq!(state.listing.pagination.page_size(), 0);
    assert!(state.listing.visible().is_empty());
    assert!(!state.listing.has_next());
}

#[test]
fn test_resize_clamps_current_page() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadCountries);
    let request_id = state.listing.request_id.expect("request id");
    run(
        &mut state,
        Message::CountriesLoaded {
            request_id,
            countries: test_countries(30),
        },
    );
    run(
        &mut state,
        Message::Resize {
            width: 80,
            height: 13,
        },
    );
    assert_eq!(state.listing.pagination.page_size(), 5);
    for _ in 0..5 {
        run(&mut state, Message::NextPage);
    }
    assert_eq!(state.listing.pagination.page(), 6);

    run(
        &mut state,
        Message::Resize {
            width: 80,
            height: 28,
        },
    );

    // 30 items at 20 per page: two pages
    assert_eq!(state.listing.pagination.page(), 2);
    assert_eq!(state.listing.visible().len(), 10);
}

#[test]
fn test_resize_ignored_with_explicit_page_size() {
    let mut state = loaded_state(30, 7);
    run(
        &mut state,
        Message::Resize {
            width: 80,
            height: 50,
        },
    );
    assert_eq!(state.listing.pagination.page_size(), 7);
    assert_eq!(state.viewport.height, 50);
}

#[test]
fn test_selection_moves_across_pages() {
    let mut state = loaded_state(6, 3);

    run(&mut state, Message::SelectLastCountry);
    assert_eq!(state.listing.selected, 2);

    run(&mut state, Message::SelectNextCountry);
    assert_eq!(state.listing.pagination.page(), 2);
    assert_eq!(state.listing.selected, 0);

    run(&mut state, Message::SelectPreviousCountry);
    assert_eq!(state.listing.pagination.page(), 1);
    assert_eq!(state.listing.selected, 2);

    run(&mut state, Message::SelectFirstCountry);
    assert_eq!(state.listing.selected, 0);
}

#[test]
fn test_enter_opens_selected_country() {
    let mut state = loaded_state(5, 5);
    run(&mut state, Message::SelectNextCountry);

    let msg = handle_key(&state, InputKey::Enter).expect("message");
    let actions = run(&mut state, msg);

    assert_eq!(state.route, Route::country("C1"));
    assert_eq!(state.history, vec![Route::Home]);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchCountry { code, .. }] if code.as_str() == "C1"
    ));
}

// ─────────────────────────────────────────────────────────
// Detail
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_to_country_starts_loading() {
    let mut state = loaded_state(3, 3);
    open_country(&mut state, "NO");

    assert!(matches!(detail_status(&state), DetailStatus::Loading(_)));
}

#[test]
fn test_country_loaded_stores_detail() {
    let mut state = loaded_state(3, 3);
    let request_id = open_country(&mut state, "NO");

    run(
        &mut state,
        Message::CountryLoaded {
            request_id,
            detail: Box::new(test_detail("NO", "Norway")),
        },
    );

    let detail = state
        .detail
        .as_ref()
        .and_then(|d| d.detail())
        .expect("loaded");
    assert_eq!(detail.common_name, "Norway");
    assert_eq!(detail.borders.len(), 2);
    assert_eq!(detail.population.len(), 3);
}

#[test]
fn test_country_failure_sets_fixed_message_and_stops_spinner() {
    let mut state = loaded_state(3, 3);
    let request_id = open_country(&mut state, "XX");

    run(
        &mut state,
        Message::CountryLoadFailed {
            request_id,
            code: CountryCode::new("XX"),
            error: ApiError::Status {
                status: 500,
                body: "boom".into(),
            },
        },
    );

    for _ in 0..5 {
        run(&mut state, Message::Tick);
    }

    let detail = state.detail.as_ref().expect("detail");
    assert_eq!(detail.error(), Some(DETAIL_ERROR_MESSAGE));
    assert!(!detail.is_loading());

    // The error panel's control leads home
    let msg = handle_key(&state, InputKey::Enter);
    assert!(matches!(msg, Some(Message::GoHome)));
    run(&mut state, Message::GoHome);
    assert!(state.route.is_home());
    assert!(state.detail.is_none());
}

#[test]
fn test_stale_detail_response_never_overwrites() {
    let mut state = loaded_state(3, 3);
    let first = open_country(&mut state, "NO");
    let second = open_country(&mut state, "SE");
    assert!(second > first);

    run(
        &mut state,
        Message::CountryLoaded {
            request_id: first,
            detail: Box::new(test_detail("NO", "Norway")),
        },
    );
    assert!(matches!(detail_status(&state), DetailStatus::Loading(_)));

    run(
        &mut state,
        Message::CountryLoadFailed {
            request_id: first,
            code: CountryCode::new("NO"),
            error: ApiError::NotFound("country-info/NO".into()),
        },
    );
    assert!(matches!(detail_status(&state), DetailStatus::Loading(_)));

    run(
        &mut state,
        Message::CountryLoaded {
            request_id: second,
            detail: Box::new(test_detail("SE", "Sweden")),
        },
    );
    assert_eq!(
        state.detail.as_ref().and_then(|d| d.detail()).map(|d| d.common_name.as_str()),
        Some("Sweden")
    );
}

#[test]
fn test_response_after_leaving_detail_is_ignored() {
    let mut state = loaded_state(3, 3);
    let request_id = open_country(&mut state, "NO");
    run(&mut state, Message::GoHome);

    run(
        &mut state,
        Message::CountryLoaded {
            request_id,
            detail: Box::new(test_detail("NO", "Norway")),
        },
    );

    assert!(state.detail.is_none());
    assert!(state.route.is_home());
}

#[test]
fn test_no_population_data_is_kept_explicit() {
    let mut state = loaded_state(3, 3);
    let request_id = open_country(&mut state, "AQ");
    let mut detail = test_detail("AQ", "Antarctica");
    detail.population = PopulationSeries::NoData;
    detail.borders.clear();

    run(
        &mut state,
        Message::CountryLoaded {
            request_id,
            detail: Box::new(detail),
        },
    );

    let loaded = state
        .detail
        .as_ref()
        .and_then(|d| d.detail())
        .expect("loaded");
    assert!(!loaded.population.has_data());
    assert!(loaded.population.chart().is_none());

    // No borders: selection keys are harmless
    run(&mut state, Message::SelectNextBorder);
    let actions = run(&mut state, Message::OpenSelectedBorder);
    assert!(actions.is_empty());
    assert_eq!(state.route, Route::country("AQ"));
}

#[test]
fn test_border_navigation_and_back() {
    let mut state = loaded_state(3, 3);
    let request_id = open_country(&mut state, "NO");
    run(
        &mut state,
        Message::CountryLoaded {
            request_id,
            detail: Box::new(test_detail("NO", "Norway")),
        },
    );

    assert!(matches!(
        handle_key(&state, InputKey::Right),
        Some(Message::SelectNextBorder)
    ));
    run(&mut state, Message::SelectNextBorder);
    run(&mut state, Message::SelectNextBorder);
    match detail_status(&state) {
        DetailStatus::Loaded {
            selected_border, ..
        } => assert_eq!(*selected_border, 1),
        other => panic!("expected Loaded, got {:?}", other),
    }

    let actions = run(&mut state, Message::OpenSelectedBorder);
    assert_eq!(state.route, Route::country("SE"));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchCountry { code, .. }] if code.as_str() == "SE"
    ));
    assert_eq!(state.history, vec![Route::Home, Route::country("NO")]);

    // Going back re-issues the Norway request
    let actions = run(&mut state, Message::GoBack);
    assert_eq!(state.route, Route::country("NO"));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchCountry { code, .. }] if code.as_str() == "NO"
    ));

    let actions = run(&mut state, Message::GoBack);
    assert!(state.route.is_home());
    assert!(actions.is_empty());
}

#[test]
fn test_home_key_clears_history() {
    let mut state = loaded_state(3, 3);
    open_country(&mut state, "NO");
    open_country(&mut state, "SE");

    let msg = handle_key(&state, InputKey::Char('h'));
    assert!(matches!(msg, Some(Message::GoHome)));
    run(&mut state, Message::GoHome);

    assert!(state.route.is_home());
    assert!(state.history.is_empty());
}

#[test]
fn test_going_home_does_not_refetch_listing() {
    let mut state = loaded_state(3, 3);
    open_country(&mut state, "NO");

    let actions = run(&mut state, Message::GoHome);

    assert!(actions.is_empty());
    assert_eq!(state.listing.total(), 3);
}

#[test]
fn test_start_on_country_fetches_listing_on_first_home_visit() {
    let mut state = AppState::new();
    let request_id = open_country(&mut state, "NO");
    assert_eq!(state.listing.status, ListingStatus::Idle);
    assert_eq!(request_id, RequestId::new(1));

    let actions = run(&mut state, Message::GoBack);

    assert!(state.route.is_home());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchCountries { .. }]
    ));
}

#[test]
fn test_reload_country_issues_new_request() {
    let mut state = loaded_state(3, 3);
    let first = open_country(&mut state, "NO");
    run(
        &mut state,
        Message::CountryLoadFailed {
            request_id: first,
            code: CountryCode::new("NO"),
            error: ApiError::Network("timeout".into()),
        },
    );

    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::ReloadCountry)
    ));
    let actions = run(&mut state, Message::ReloadCountry);

    match actions.as_slice() {
        [UpdateAction::FetchCountry { request_id, .. }] => assert!(*request_id > first),
        other => panic!("expected FetchCountry, got {:?}", other),
    }
    assert!(matches!(detail_status(&state), DetailStatus::Loading(_)));
    // Reloading is not a navigation step
    assert_eq!(state.history, vec![Route::Home]);
}

#[test]
fn test_loading_detail_ignores_selection_keys() {
    let mut state = loaded_state(3, 3);
    open_country(&mut state, "NO");

    assert!(handle_key(&state, InputKey::Enter).is_none());
    assert!(handle_key(&state, InputKey::Char('r')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::GoBack)
    ));
}
