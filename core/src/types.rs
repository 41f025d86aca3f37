//! Domain DTOs for the vehicles API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client's wire contract is stated in one place. Integration tests
//! catch any schema drift between the two crates. Timestamps are
//! server-assigned and never written by this client; `status` is a closed
//! enum, so an unknown wire value fails deserialization instead of being
//! carried along silently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rental state of a vehicle. The API only ever emits these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    /// Parse a form-select value. Returns `None` for anything outside the
    /// fixed set; callers decide whether that is an error or a no-op.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Self::Available),
            "rented" => Some(Self::Rented),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Rented => "rented",
            Self::Maintenance => "maintenance",
        }
    }
}

/// A persisted vehicle as returned by the API.
///
/// `id` and the two timestamps are server-assigned; the client never
/// fabricates them and replaces its local copy wholesale from API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub color: String,
    pub mileage: f64,
    pub price: f64,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a vehicle, and the form's editable field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub color: String,
    pub mileage: f64,
    pub price: f64,
    pub status: VehicleStatus,
}

impl Vehicle {
    /// The editable subset of this record, used to seed the edit form.
    pub fn to_input(&self) -> VehicleInput {
        VehicleInput {
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            plate: self.plate.clone(),
            color: self.color.clone(),
            mileage: self.mileage,
            price: self.price,
            status: self.status,
        }
    }
}

/// Request payload for updating an existing vehicle. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
}

impl From<VehicleInput> for UpdateVehicle {
    /// Full-field update, the shape the edit form submits.
    fn from(input: VehicleInput) -> Self {
        Self {
            brand: Some(input.brand),
            model: Some(input.model),
            year: Some(input.year),
            plate: Some(input.plate),
            color: Some(input.color),
            mileage: Some(input.mileage),
            price: Some(input.price),
            status: Some(input.status),
        }
    }
}
