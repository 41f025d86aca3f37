//! Stateless HTTP request builder and response parser for the vehicles API.
//!
//! # Design
//! `VehicleClient` holds only a `base_url` and carries no state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies. Any 2xx status counts as
//! success; everything else becomes a `RequestFailure`.

use crate::error::RequestFailure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{UpdateVehicle, Vehicle, VehicleInput};

/// Stateless client for the `/vehicles` REST API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct VehicleClient {
    base_url: String,
}

impl VehicleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_vehicles(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/vehicles", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_vehicle(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/vehicles/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_vehicle(&self, input: &VehicleInput) -> Result<HttpRequest, RequestFailure> {
        let body =
            serde_json::to_string(input).map_err(|e| RequestFailure::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/vehicles", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_vehicle(
        &self,
        id: i64,
        input: &UpdateVehicle,
    ) -> Result<HttpRequest, RequestFailure> {
        let body =
            serde_json::to_string(input).map_err(|e| RequestFailure::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/vehicles/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_vehicle(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/vehicles/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_vehicles(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Vehicle>, RequestFailure> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }

    pub fn parse_get_vehicle(&self, response: HttpResponse) -> Result<Vehicle, RequestFailure> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }

    pub fn parse_create_vehicle(&self, response: HttpResponse) -> Result<Vehicle, RequestFailure> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }

    pub fn parse_update_vehicle(&self, response: HttpResponse) -> Result<Vehicle, RequestFailure> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }

    /// A successful delete carries no body; the response is only checked for
    /// a 2xx status (204 expected).
    pub fn parse_delete_vehicle(&self, response: HttpResponse) -> Result<(), RequestFailure> {
        check_success(&response)
    }
}

/// Map any non-2xx status to `RequestFailure::Http`.
fn check_success(response: &HttpResponse) -> Result<(), RequestFailure> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestFailure::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
