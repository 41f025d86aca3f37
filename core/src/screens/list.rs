//! List screen: loads every vehicle, deletes with an explicit confirmation
//! step.
//!
//! Delete is a three-step gate instead of a blocking native prompt:
//! `request_delete` records the candidate, `confirm_delete` emits the DELETE
//! request, `resolve_delete` applies the outcome. On success the record is
//! removed from the in-memory list by id — a local removal, not a refetch.
//! On failure the list is left untouched and the message is surfaced
//! alongside it.

use log::{debug, error};

use crate::client::VehicleClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::resource::AsyncResource;
use crate::types::Vehicle;

#[derive(Debug, Default)]
pub struct ListScreen {
    vehicles: AsyncResource<Vec<Vehicle>>,
    /// Delete candidate awaiting user confirmation.
    pending_delete: Option<i64>,
    /// Delete request currently in flight. At most one at a time.
    deleting: Option<i64>,
    delete_error: Option<String>,
    generation: u64,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicles(&self) -> &AsyncResource<Vec<Vehicle>> {
        &self.vehicles
    }

    /// The id awaiting delete confirmation, if the dialog is open.
    pub fn confirming_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    /// Begin loading (on mount or explicit refresh). Returns the request,
    /// tagged with the generation the host must hand back to `resolve_load`.
    pub fn start_load(&mut self, client: &VehicleClient) -> (u64, HttpRequest) {
        self.generation += 1;
        self.vehicles = AsyncResource::Loading;
        self.delete_error = None;
        self.pending_delete = None;
        debug!("list: loading vehicles (generation {})", self.generation);
        (self.generation, client.build_list_vehicles())
    }

    /// Apply a load response. A response from a superseded load is dropped.
    pub fn resolve_load(&mut self, client: &VehicleClient, generation: u64, response: HttpResponse) {
        if generation != self.generation {
            debug!("list: discarding stale response (generation {generation})");
            return;
        }
        match client.parse_list_vehicles(response) {
            Ok(vehicles) => {
                debug!("list: loaded {} vehicles", vehicles.len());
                self.vehicles = AsyncResource::Ready(vehicles);
            }
            Err(err) => {
                error!("list: failed to load vehicles: {err}");
                self.vehicles = AsyncResource::Errored(err.to_string());
            }
        }
    }

    /// Open the delete confirmation for `id`. Ignored while another delete
    /// is still in flight.
    pub fn request_delete(&mut self, id: i64) {
        if self.deleting.is_none() {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete and emit the DELETE request, or `None` if
    /// nothing is awaiting confirmation.
    pub fn confirm_delete(&mut self, client: &VehicleClient) -> Option<HttpRequest> {
        let id = self.pending_delete.take()?;
        self.deleting = Some(id);
        self.delete_error = None;
        Some(client.build_delete_vehicle(id))
    }

    /// Apply the delete response. On success the matching record is removed
    /// from the in-memory list; on failure the list is unchanged and the
    /// message is kept for display.
    pub fn resolve_delete(&mut self, client: &VehicleClient, response: HttpResponse) {
        let Some(id) = self.deleting.take() else {
            return;
        };
        match client.parse_delete_vehicle(response) {
            Ok(()) => {
                if let Some(vehicles) = self.vehicles.ready_mut() {
                    vehicles.retain(|v| v.id != id);
                }
            }
            Err(err) => {
                error!("list: failed to delete vehicle {id}: {err}");
                self.delete_error = Some(err.to_string());
            }
        }
    }
}
