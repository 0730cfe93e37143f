//! Action handlers: UpdateAction dispatch and background fetch tasks
//!
//! Every fetch runs on its own tokio task and reports back through the
//! message channel. Tasks are never cancelled; a response that arrives after
//! a newer request was issued is dropped by the update function.

use std::sync::Arc;

use cex_api::CountryService;
use cex_core::CountryCode;
use tokio::sync::mpsc;
use tracing::debug;

use crate::message::Message;
use crate::state::RequestId;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: CountryService + Sync + 'static,
{
    match action {
        UpdateAction::FetchCountries { request_id } => {
            spawn_fetch_countries(request_id, msg_tx, service);
        }
        UpdateAction::FetchCountry { request_id, code } => {
            spawn_fetch_country(request_id, code, msg_tx, service);
        }
    }
}

/// Spawn the listing request in background
pub fn spawn_fetch_countries<S>(
    request_id: RequestId,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) where
    S: CountryService + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match service.list_countries().await {
            Ok(countries) => Message::CountriesLoaded {
                request_id,
                countries,
            },
            Err(error) => Message::CountriesLoadFailed { request_id, error },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Listing response {} dropped: channel closed", request_id);
        }
    });
}

/// Spawn a detail request in background
pub fn spawn_fetch_country<S>(
    request_id: RequestId,
    code: CountryCode,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) where
    S: CountryService + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match service.country_info(&code).await {
            Ok(detail) => Message::CountryLoaded {
                request_id,
                detail: Box::new(detail),
            },
            Err(error) => Message::CountryLoadFailed {
                request_id,
                code,
                error,
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Detail response {} dropped: channel closed", request_id);
        }
    });
}
