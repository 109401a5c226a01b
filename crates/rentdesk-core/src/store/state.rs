//! Load phase of a store.

use std::fmt;

/// Observable phase of a page backed by a [`ResourceStore`](super::ResourceStore).
///
/// Driven only by the outcome of `load()`. There is no automatic way out of
/// `Errored`; the caller has to load again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing loaded yet, or a load is in flight.
    #[default]
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed; carries the message to show inline.
    Errored(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready => write!(f, "ready"),
            LoadState::Errored(message) => write!(f, "error: {message}"),
        }
    }
}
