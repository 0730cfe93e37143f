//! Application state (Model in TEA pattern)

use std::fmt;

use cex_core::{
    page_size_for_height, CountryCode, CountryDetail, CountrySummary, Pagination, Route,
};

use crate::config::Settings;

/// Text shown whenever a detail request fails, whatever the cause
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch country information. Please try again.";

/// Maximum number of routes remembered for `GoBack`
pub const MAX_HISTORY: usize = 50;

/// Identifies one fetch so late responses can be recognised and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the whole application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Spinner state for an in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    /// Text shown next to the spinner
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
}

impl LoadingState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            animation_frame: 0,
        }
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}

/// Last known terminal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading(LoadingState),
    Loaded,
    /// Request failed; holds the error text for the banner
    Failed(String),
}

/// State of the Listing View
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub countries: Vec<CountrySummary>,
    pub status: ListingStatus,
    pub pagination: Pagination,
    /// Highlighted row, relative to the visible page
    pub selected: usize,
    /// Latest listing request; other responses are stale
    pub request_id: Option<RequestId>,
}

impl ListingState {
    pub fn total(&self) -> usize {
        self.countries.len()
    }

    /// Countries on the current page
    pub fn visible(&self) -> &[CountrySummary] {
        self.pagination.slice(&self.countries)
    }

    pub fn selected_country(&self) -> Option<&CountrySummary> {
        self.visible().get(self.selected)
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next(self.total())
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListingStatus::Loading(_))
    }

    /// Keep the highlighted row inside the visible page
    pub fn clamp_selection(&mut self) {
        let visible = self.visible().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    /// Apply a new page size, keeping the page and selection valid
    pub fn set_page_size(&mut self, page_size: usize) {
        let total = self.total();
        self.pagination.set_page_size(page_size, total);
        self.clamp_selection();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading(LoadingState),
    Loaded {
        detail: Box<CountryDetail>,
        /// Highlighted border country
        selected_border: usize,
    },
    /// Request failed; holds the user-facing message
    Failed(String),
}

/// State of the Detail View for one country code
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub code: CountryCode,
    pub request_id: RequestId,
    pub status: DetailStatus,
}

impl DetailState {
    pub fn loading(code: CountryCode, request_id: RequestId) -> Self {
        let message = format!("Fetching {}...", code);
        Self {
            code,
            request_id,
            status: DetailStatus::Loading(LoadingState::new(message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading(_))
    }

    pub fn detail(&self) -> Option<&CountryDetail> {
        match &self.status {
            DetailStatus::Loaded { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            DetailStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Current view
    pub route: Route,

    /// Previously visited routes, most recent last
    pub history: Vec<Route>,

    pub listing: ListingState,

    /// Present while a Country route is active
    pub detail: Option<DetailState>,

    pub viewport: Viewport,

    pub settings: Settings,

    /// Resolved service base URL, shown in the header
    pub api_url: String,

    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), String::new())
    }

    pub fn with_settings(settings: Settings, api_url: impl Into<String>) -> Self {
        let page_size = settings.listing.page_size.unwrap_or(0);
        Self {
            phase: AppPhase::Running,
            route: Route::Home,
            history: Vec::new(),
            listing: ListingState {
                pagination: Pagination::new(page_size),
                ..ListingState::default()
            },
            detail: None,
            viewport: Viewport::default(),
            settings,
            api_url: api_url.into(),
            next_request_id: 0,
        }
    }

    /// Hand out a fresh, strictly increasing request id
    pub fn next_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Page size for the current viewport, or the configured one
    pub fn effective_page_size(&self) -> usize {
        match self.settings.listing.page_size {
            Some(size) => size,
            None => page_size_for_height(
                u32::from(self.viewport.height),
                u32::from(self.settings.listing.header_height),
                u32::from(self.settings.listing.item_height),
            ),
        }
    }

    /// Whether the viewport drives the page size
    pub fn uses_viewport_page_size(&self) -> bool {
        self.settings.listing.page_size.is_none()
    }

    /// Remember `route` for `GoBack`, dropping the oldest entry when full
    pub fn push_history(&mut self, route: Route) {
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(route);
    }

    /// Advance every active spinner
    pub fn tick_loading(&mut self) {
        if let ListingStatus::Loading(loading) = &mut self.listing.status {
            loading.tick();
        }
        if let Some(DetailState {
            status: DetailStatus::Loading(loading),
            ..
        }) = &mut self.detail
        {
            loading.tick();
        }
    }
}
