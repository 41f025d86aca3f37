//! Screen-level state machines for the three views.
//!
//! Each screen owns its own `AsyncResource` and a generation counter, emits
//! `HttpRequest` values for the host to execute, and consumes the resulting
//! `HttpResponse` values. Responses from superseded loads are discarded by
//! generation comparison, so re-navigating mid-flight can never apply a
//! stale result over a fresh one.

pub mod detail;
pub mod form;
pub mod list;

pub use detail::DetailScreen;
pub use form::{FormField, FormMode, FormPhase, FormScreen};
pub use list::ListScreen;
