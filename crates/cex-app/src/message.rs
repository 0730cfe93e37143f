//! Message types for the application (TEA pattern)

use cex_api::ApiError;
use cex_core::{CountryCode, CountryDetail, CountrySummary, Route};

use crate::input_key::InputKey;
use crate::state::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Terminal size changed (also sent once at startup)
    Resize { width: u16, height: u16 },

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a route, recording the current one in history
    Navigate(Route),
    /// Return to the previous route
    GoBack,
    /// Return to the listing and clear history
    GoHome,

    // ─────────────────────────────────────────────────────────
    // Listing Messages
    // ─────────────────────────────────────────────────────────
    /// Request the country collection (startup and retry)
    LoadCountries,
    /// Country collection arrived
    CountriesLoaded {
        request_id: RequestId,
        countries: Vec<CountrySummary>,
    },
    /// Country collection request failed
    CountriesLoadFailed {
        request_id: RequestId,
        error: ApiError,
    },
    NextPage,
    PreviousPage,
    SelectNextCountry,
    SelectPreviousCountry,
    SelectFirstCountry,
    SelectLastCountry,
    /// Open the Detail View of the highlighted country
    OpenSelectedCountry,

    // ─────────────────────────────────────────────────────────
    // Detail Messages
    // ─────────────────────────────────────────────────────────
    /// Re-issue the detail request for the current route
    ReloadCountry,
    /// Detail request succeeded
    CountryLoaded {
        request_id: RequestId,
        detail: Box<CountryDetail>,
    },
    /// Detail request failed
    CountryLoadFailed {
        request_id: RequestId,
        code: CountryCode,
        error: ApiError,
    },
    SelectNextBorder,
    SelectPreviousBorder,
    /// Navigate to the highlighted border country
    OpenSelectedBorder,
}
