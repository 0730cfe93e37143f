//! Key event handlers for the two views

use cex_core::Route;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DetailState, DetailStatus};

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if matches!(key, InputKey::Char('q') | InputKey::CharCtrl('c')) {
        return Some(Message::Quit);
    }

    match (&state.route, &state.detail) {
        (Route::Home, _) => handle_key_listing(state, key),
        (Route::Country(_), Some(detail)) => handle_key_detail(detail, key),
        (Route::Country(_), None) => handle_key_detail_fallback(key),
    }
}

/// Handle key events in the Listing View
fn handle_key_listing(state: &AppState, key: InputKey) -> Option<Message> {
    let listing = &state.listing;
    match key {
        InputKey::Char('r') => Some(Message::LoadCountries),

        // Paging keys only act when the matching control is on screen
        InputKey::Right | InputKey::Char('n') | InputKey::PageDown if listing.has_next() => {
            Some(Message::NextPage)
        }
        InputKey::Left | InputKey::Char('p') | InputKey::PageUp if listing.has_previous() => {
            Some(Message::PreviousPage)
        }

        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextCountry),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousCountry),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirstCountry),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLastCountry),

        InputKey::Enter if listing.selected_country().is_some() => {
            Some(Message::OpenSelectedCountry)
        }

        _ => None,
    }
}

/// Handle key events in the Detail View
fn handle_key_detail(detail: &DetailState, key: InputKey) -> Option<Message> {
    match (&detail.status, key) {
        (_, InputKey::Esc | InputKey::Backspace) => Some(Message::GoBack),
        (_, InputKey::Char('h')) => Some(Message::GoHome),

        (DetailStatus::Loading(_), _) => None,

        (_, InputKey::Char('r')) => Some(Message::ReloadCountry),

        // "Back to Home Page" is the only control on the error panel
        (DetailStatus::Failed(_), InputKey::Enter) => Some(Message::GoHome),
        (DetailStatus::Failed(_), _) => None,

        (
            DetailStatus::Loaded { .. },
            InputKey::Right | InputKey::Tab | InputKey::Down | InputKey::Char('l' | 'j'),
        ) => Some(Message::SelectNextBorder),
        (
            DetailStatus::Loaded { .. },
            InputKey::Left | InputKey::BackTab | InputKey::Up | InputKey::Char('k'),
        ) => Some(Message::SelectPreviousBorder),
        (DetailStatus::Loaded { .. }, InputKey::Enter) => Some(Message::OpenSelectedBorder),

        _ => None,
    }
}

fn handle_key_detail_fallback(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace => Some(Message::GoBack),
        InputKey::Char('h') | InputKey::Enter => Some(Message::GoHome),
        _ => None,
    }
}
