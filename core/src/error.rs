//! The uniform error signal for any failed API interaction.
//!
//! # Design
//! Screens do not distinguish "not found" from "server error" from "bad
//! payload" — every failure is rendered as one human-readable message that
//! replaces the screen's normal content. `Http` keeps the raw status and
//! body for diagnosability; its rendering includes the canonical reason
//! phrase so a bare `404` reads as `HTTP 404 Not Found`.

use std::fmt;

/// Error returned by `VehicleClient` parse methods and surfaced, rendered,
/// by the screen state machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The server answered outside the 2xx range.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),
}

/// Canonical reason phrase for the statuses this client actually meets.
fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Http { status, body } => {
                let reason = reason_phrase(*status);
                match (reason.is_empty(), body.is_empty()) {
                    (false, false) => write!(f, "HTTP {status} {reason}: {body}"),
                    (false, true) => write!(f, "HTTP {status} {reason}"),
                    (true, false) => write!(f, "HTTP {status}: {body}"),
                    (true, true) => write!(f, "HTTP {status}"),
                }
            }
            RequestFailure::Decode(msg) => write!(f, "deserialization failed: {msg}"),
            RequestFailure::Encode(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestFailure {}
