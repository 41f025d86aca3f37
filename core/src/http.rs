//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and interprets `HttpResponse` values without ever touching the
//! network; the host (UI shell or test harness) executes the actual
//! round-trip. All fields are owned so values can be handed across any
//! embedding boundary without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `VehicleClient::build_*` methods and screen state machines. The
/// host executes it and feeds the resulting `HttpResponse` back in.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status falls in the 2xx success range. The vehicles API
    /// signals success with any 2xx (204 for delete), so the client treats
    /// the whole range uniformly.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
