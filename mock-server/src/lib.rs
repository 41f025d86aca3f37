//! In-memory vehicles API implementing the REST contract the client core
//! consumes: `GET/POST /vehicles`, `GET/PUT/DELETE /vehicles/{id}`.
//!
//! Ids are sequential and server-assigned, timestamps are set on create and
//! refreshed on update, and plate uniqueness is enforced with 409 — the
//! server, not the client, is the true enforcer of that contract.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub color: String,
    pub mileage: f64,
    pub price: f64,
    pub status: VehicleStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<f64>,
    pub price: Option<f64>,
    pub status: Option<VehicleStatus>,
}

#[derive(Default)]
pub struct Store {
    vehicles: BTreeMap<i64, Vehicle>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_vehicles(State(db): State<Db>) -> Json<Vec<Vehicle>> {
    let store = db.read().await;
    Json(store.vehicles.values().cloned().collect())
}

async fn create_vehicle(
    State(db): State<Db>,
    Json(input): Json<CreateVehicle>,
) -> Result<(StatusCode, Json<Vehicle>), StatusCode> {
    let mut store = db.write().await;
    if store.vehicles.values().any(|v| v.plate == input.plate) {
        return Err(StatusCode::CONFLICT);
    }
    store.next_id += 1;
    let now = Utc::now();
    let vehicle = Vehicle {
        id: store.next_id,
        brand: input.brand,
        model: input.model,
        year: input.year,
        plate: input.plate,
        color: input.color,
        mileage: input.mileage,
        price: input.price,
        status: input.status,
        created_at: now,
        updated_at: now,
    };
    store.vehicles.insert(vehicle.id, vehicle.clone());
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn get_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Vehicle>, StatusCode> {
    let store = db.read().await;
    store.vehicles.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateVehicle>,
) -> Result<Json<Vehicle>, StatusCode> {
    let mut store = db.write().await;
    if !store.vehicles.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    if let Some(plate) = &input.plate {
        let taken = store
            .vehicles
            .values()
            .any(|v| v.id != id && v.plate == *plate);
        if taken {
            return Err(StatusCode::CONFLICT);
        }
    }
    let vehicle = store.vehicles.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(brand) = input.brand {
        vehicle.brand = brand;
    }
    if let Some(model) = input.model {
        vehicle.model = model;
    }
    if let Some(year) = input.year {
        vehicle.year = year;
    }
    if let Some(plate) = input.plate {
        vehicle.plate = plate;
    }
    if let Some(color) = input.color {
        vehicle.color = color;
    }
    if let Some(mileage) = input.mileage {
        vehicle.mileage = mileage;
    }
    if let Some(price) = input.price {
        vehicle.price = price;
    }
    if let Some(status) = input.status {
        vehicle.status = status;
    }
    vehicle.updated_at = Utc::now();
    Ok(Json(vehicle.clone()))
}

async fn delete_vehicle(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .vehicles
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
