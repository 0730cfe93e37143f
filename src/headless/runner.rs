//! Headless mode runner - drives the Engine without a terminal
//!
//! Issues one request through the normal message flow, waits for the view to
//! settle, then emits the outcome as JSON events.

use std::io::Write;

use cex_api::CountryService;
use cex_app::message::Message;
use cex_app::state::{AppState, DetailStatus, ListingStatus};
use cex_app::Engine;
use cex_core::prelude::*;
use cex_core::CountryCode;
use cex_core::Route;

use super::HeadlessEvent;

/// What to fetch in headless mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessRequest {
    /// A listing page (1-based)
    Page(usize),
    /// One country's detail
    Country(CountryCode),
}

/// Run in headless mode, printing events to stdout.
///
/// Returns `Ok(false)` when the request failed (an error event was printed).
pub async fn run_headless<S>(engine: Engine<S>, request: HeadlessRequest) -> Result<bool>
where
    S: CountryService + Sync + 'static,
{
    let mut stdout = std::io::stdout();
    run_with_output(engine, request, &mut stdout).await
}

/// Headless run writing events to `out`
pub async fn run_with_output<S, W>(
    mut engine: Engine<S>,
    request: HeadlessRequest,
    out: &mut W,
) -> Result<bool>
where
    S: CountryService + Sync + 'static,
    W: Write,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Country Explorer starting in HEADLESS mode");
    info!("Request: {:?} ({})", request, engine.state.api_url);
    info!("═══════════════════════════════════════════════════════");

    let succeeded = match request {
        HeadlessRequest::Page(page) => {
            engine.process_message(Message::LoadCountries);
            if !wait_until(&mut engine, out, |s| !s.listing.is_loading()).await {
                return Ok(false);
            }
            emit_page(&mut engine, page, out)
        }
        HeadlessRequest::Country(code) => {
            engine.process_message(Message::Navigate(Route::Country(code)));
            let settled = |s: &AppState| s.detail.as_ref().is_some_and(|d| !d.is_loading());
            if !wait_until(&mut engine, out, settled).await {
                return Ok(false);
            }
            emit_detail(&engine.state, out)
        }
    };

    info!("Country Explorer headless mode exiting");
    Ok(succeeded)
}

/// Process messages until `done` holds. Returns false on quit.
async fn wait_until<S, W, F>(engine: &mut Engine<S>, out: &mut W, done: F) -> bool
where
    S: CountryService + Sync + 'static,
    W: Write,
    F: Fn(&AppState) -> bool,
{
    while !done(&engine.state) {
        if engine.should_quit() {
            info!("Quit requested");
            HeadlessEvent::error("Interrupted", true).emit_to(out);
            return false;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                emit_pre_message_events(&engine.state, &msg, out);
                engine.process_message(msg);
            }
            None => {
                info!("Message channel closed");
                return false;
            }
        }
    }
    true
}

/// Failure messages carry the underlying error, which the view state drops
fn emit_pre_message_events<W: Write>(state: &AppState, msg: &Message, out: &mut W) {
    match msg {
        Message::CountriesLoadFailed { request_id, error }
            if state.listing.request_id == Some(*request_id) =>
        {
            HeadlessEvent::error(error.to_string(), true).emit_to(out);
        }
        Message::CountryLoadFailed {
            request_id,
            code,
            error,
        } if state.detail.as_ref().map(|d| d.request_id) == Some(*request_id) => {
            HeadlessEvent::error(format!("{}: {}", code, error), true).emit_to(out);
        }
        _ => {}
    }
}

fn emit_page<S, W>(engine: &mut Engine<S>, page: usize, out: &mut W) -> bool
where
    S: CountryService + Sync + 'static,
    W: Write,
{
    if !matches!(engine.state.listing.status, ListingStatus::Loaded) {
        // Failure was already reported
        return false;
    }

    let total = engine.state.listing.total();
    let page_count = engine.state.listing.pagination.page_count(total);
    if page == 0 || page > page_count.max(1) {
        HeadlessEvent::error(
            format!("Page {} is out of range (1-{})", page, page_count.max(1)),
            true,
        )
        .emit_to(out);
        return false;
    }

    // Page through the normal message flow so the cursor matches the TUI
    for _ in 1..page {
        engine.process_message(Message::NextPage);
    }

    let listing = &engine.state.listing;
    HeadlessEvent::page(
        listing.pagination.page(),
        page_count,
        listing.pagination.page_size(),
        total,
        listing.visible(),
    )
    .emit_to(out);
    true
}

fn emit_detail<W: Write>(state: &AppState, out: &mut W) -> bool {
    let Some(view) = state.detail.as_ref() else {
        return false;
    };

    match &view.status {
        DetailStatus::Loaded { detail, .. } => {
            HeadlessEvent::country(detail).emit_to(out);
            if !detail.population.has_data() {
                HeadlessEvent::no_population_data(detail.code.as_str()).emit_to(out);
            }
            true
        }
        DetailStatus::Failed(_) => false,
        DetailStatus::Loading(_) => {
            warn!("Detail for {} still loading", view.code);
            false
        }
    }
}
