//! Engine - owns the application state, the message channel and the service
//!
//! The TUI runner drives it: feed input messages in, drain the channel,
//! render `state`, repeat until `should_quit()`.

use std::sync::Arc;

use cex_api::CountryService;
use cex_core::Route;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Country Explorer.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Fetch tasks and the signal handler send through clones of this.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    service: Arc<S>,
}

impl<S> Engine<S>
where
    S: CountryService + Sync + 'static,
{
    /// Create the engine and spawn the signal handler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, api_url: impl Into<String>, service: S) -> Self {
        let state = AppState::with_settings(settings, api_url);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            service: Arc::new(service),
        }
    }

    /// Issue the startup requests: the listing always, plus the detail of
    /// `initial_route` when starting on a country.
    pub fn start(&mut self, initial_route: Route) {
        info!("Starting at {} ({})", initial_route, self.state.api_url);
        self.process_message(Message::LoadCountries);
        if !initial_route.is_home() {
            self.process_message(Message::Navigate(initial_route));
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.service);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DetailStatus, ListingStatus};
    use cex_api::test_utils::{test_countries, test_detail, FakeCountryService};

    fn engine(service: FakeCountryService) -> Engine<FakeCountryService> {
        let mut settings = Settings::default();
        settings.listing.page_size = Some(10);
        Engine::new(settings, "http://localhost:3000/api", service)
    }

    /// Wait for one message from a fetch task and process it
    async fn process_next(engine: &mut Engine<FakeCountryService>) {
        let msg = tokio::time::timeout(std::time::Duration::from_secs(1), engine.msg_rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed");
        engine.process_message(msg);
    }

    #[tokio::test]
    async fn test_start_loads_listing() {
        let mut engine = engine(FakeCountryService::new().with_countries(test_countries(12)));

        engine.start(Route::Home);
        assert!(engine.state.listing.is_loading());

        process_next(&mut engine).await;

        assert_eq!(engine.state.listing.status, ListingStatus::Loaded);
        assert_eq!(engine.state.listing.visible().len(), 10);
        assert!(engine.state.listing.has_next());
        assert_eq!(
            engine.service().requests(),
            vec!["AvailableCountries".to_string()]
        );
    }

    #[tokio::test]
    async fn test_start_on_country_fetches_both() {
        let mut engine = engine(
            FakeCountryService::new()
                .with_countries(test_countries(3))
                .with_detail(test_detail("NO", "Norway")),
        );

        engine.start(Route::country("NO"));
        process_next(&mut engine).await;
        process_next(&mut engine).await;

        assert_eq!(engine.state.route, Route::country("NO"));
        assert_eq!(engine.state.history, vec![Route::Home]);
        assert_eq!(engine.state.listing.total(), 3);
        assert!(matches!(
            engine.state.detail.as_ref().map(|d| &d.status),
            Some(DetailStatus::Loaded { .. })
        ));
    }

    #[tokio::test]
    async fn test_quit_message_stops_engine() {
        let mut engine = engine(FakeCountryService::new());
        engine.msg_sender().send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
