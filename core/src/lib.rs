//! Client core for the Rentcars vehicle manager.
//!
//! # Overview
//! A typed CRUD client for the `/vehicles` REST API plus the three
//! screen-level state machines (list, detail, form) that consume it. The
//! crate never touches the network (host-does-IO pattern): `VehicleClient`
//! builds `HttpRequest` values and parses `HttpResponse` values, and the
//! screens emit requests and consume responses the same way. The host — a
//! UI shell or a test harness — executes the actual HTTP round-trips,
//! keeping the whole crate deterministic and testable.
//!
//! # Design
//! - `VehicleClient` is stateless; screens hold no state beyond their own
//!   `AsyncResource` and a generation counter for discarding stale
//!   responses.
//! - Every non-2xx response becomes the uniform `RequestFailure`, rendered
//!   to a message at the screen boundary; no failure propagates further.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod resource;
pub mod route;
pub mod screens;
pub mod types;

pub use client::VehicleClient;
pub use error::RequestFailure;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resource::AsyncResource;
pub use route::Route;
pub use screens::{DetailScreen, FormField, FormMode, FormPhase, FormScreen, ListScreen};
pub use types::{UpdateVehicle, Vehicle, VehicleInput, VehicleStatus};
