//! Generic loading/error/data container shared by all screens.
//!
//! Each screen used to duplicate its own `loading` + `error` + data triple;
//! `AsyncResource` folds those into one state value, instantiated
//! independently per screen instance so no shared mutable state exists.

/// Lifecycle of one fetched value: `Idle` before the first load, `Loading`
/// while a request is outstanding, then `Ready` or `Errored` with a rendered
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResource<T> {
    Idle,
    Loading,
    Ready(T),
    Errored(String),
}

impl<T> AsyncResource<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the last load errored.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::Idle
    }
}
