//! Errors raised by the store, its accessors and the action decoder.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An accessor was used on a scope that has no store provider.
    #[error("No store provider in scope for state '{state}'")]
    NoProvider { state: &'static str },

    /// An action tag outside the closed set reached the decoder.
    #[error("Unhandled action '{tag}'")]
    UnhandledAction { tag: String },

    #[error("Action '{tag}' requires a payload (use {tag}=<value>)")]
    MissingPayload { tag: String },

    #[error("Invalid payload '{value}' for action '{tag}': {reason}")]
    InvalidPayload {
        tag: String,
        value: String,
        reason: String,
    },
}
