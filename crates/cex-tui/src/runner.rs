//! Main TUI runner - entry point and event loop

use std::time::Duration;

use cex_api::CountryService;
use cex_app::message::Message;
use cex_app::Engine;
use cex_core::prelude::*;
use cex_core::Route;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// loop itself.
pub async fn run<S>(mut engine: Engine<S>, initial_route: Route) -> Result<()>
where
    S: CountryService + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    // First page size comes from the real terminal height
    let size = term.size()?;
    engine.process_message(Message::Resize {
        width: size.width,
        height: size.height,
    });
    engine.start(initial_route);

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("Country Explorer exiting");

    result
}

fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: CountryService + Sync + 'static,
{
    let tick_rate = Duration::from_millis(engine.state.settings.ui.tick_rate_ms);

    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
