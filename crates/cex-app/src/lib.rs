//! cex-app - Application state and orchestration for Country Explorer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine that owns the message loop, configuration loading, background fetch
//! dispatch and signal handling.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DetailState, DetailStatus, ListingState, ListingStatus, RequestId};
