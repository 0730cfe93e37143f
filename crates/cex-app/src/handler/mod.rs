//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `navigation`: Route changes and history
//! - `listing`: Listing fetch results, paging and selection
//! - `detail`: Detail fetch results and border selection

pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod listing;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use cex_core::CountryCode;

use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the full country collection
    FetchCountries { request_id: RequestId },

    /// Fetch one country's detail and population series
    FetchCountry {
        request_id: RequestId,
        code: CountryCode,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
