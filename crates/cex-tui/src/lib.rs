//! cex-tui - Terminal UI for Country Explorer
//!
//! Takes an Engine from cex-app and adds terminal rendering, event polling
//! and the widgets for the Listing and Detail views.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
