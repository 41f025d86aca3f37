//! Detail screen: a pure read view of one vehicle.
//!
//! The identifier comes from the route's `{id}` segment as a raw string. A
//! missing or unparseable segment errors immediately, before any request is
//! built. Calling `load` again (the route parameter changed) restarts the
//! cycle under a new generation; a resolution from the superseded load is
//! dropped.

use log::{debug, error};

use crate::client::VehicleClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::resource::AsyncResource;
use crate::types::Vehicle;

#[derive(Debug, Default)]
pub struct DetailScreen {
    vehicle: AsyncResource<Vehicle>,
    generation: u64,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(&self) -> &AsyncResource<Vehicle> {
        &self.vehicle
    }

    /// Start (or restart) the fetch for the routed identifier. Returns the
    /// generation-tagged GET request, or `None` when the identifier is
    /// absent or not an integer — in which case the screen is already
    /// errored and no network call must be made.
    pub fn load(&mut self, client: &VehicleClient, id_param: Option<&str>) -> Option<(u64, HttpRequest)> {
        let Some(raw) = id_param else {
            self.vehicle = AsyncResource::Errored("identifier not provided".to_string());
            return None;
        };
        let Ok(id) = raw.parse::<i64>() else {
            self.vehicle = AsyncResource::Errored(format!("invalid identifier: {raw}"));
            return None;
        };
        self.generation += 1;
        self.vehicle = AsyncResource::Loading;
        debug!("detail: loading vehicle {id} (generation {})", self.generation);
        Some((self.generation, client.build_get_vehicle(id)))
    }

    /// Apply a fetch response. Stale generations are discarded.
    pub fn resolve(&mut self, client: &VehicleClient, generation: u64, response: HttpResponse) {
        if generation != self.generation {
            debug!("detail: discarding stale response (generation {generation})");
            return;
        }
        match client.parse_get_vehicle(response) {
            Ok(vehicle) => self.vehicle = AsyncResource::Ready(vehicle),
            Err(err) => {
                error!("detail: failed to load vehicle: {err}");
                self.vehicle = AsyncResource::Errored(err.to_string());
            }
        }
    }
}
