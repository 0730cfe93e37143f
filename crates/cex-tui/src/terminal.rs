//! Terminal setup and restoration

use cex_core::prelude::*;

/// Install a panic hook that restores the terminal and records the panic
/// in the log file before the default hook prints it.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
