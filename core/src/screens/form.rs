//! Form screen: dual-mode create/edit controller.
//!
//! Mode is derived from the routed identifier: present means edit, absent
//! means create. Edit mode preloads the record and locks the plate field
//! (plate is the API's natural key, write-once by this client's policy).
//! Submit enters a dedicated phase so a second submit emits nothing while
//! the first is in flight. A failed submit keeps every entered value and
//! the form stays editable; a successful one signals navigation back to the
//! list.

use chrono::{Datelike, Utc};
use log::{debug, error, warn};

use crate::client::VehicleClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::route::Route;
use crate::types::{UpdateVehicle, VehicleInput, VehicleStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Lifecycle of the form itself. `Errored` means the form could not be
/// shown at all (edit-mode preload failed or the routed id was garbage);
/// submit failures instead land in `submit_error` so the entered values
/// stay on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Editing,
    Submitting,
    Errored(String),
}

/// One editable field, addressed by the change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Brand,
    Model,
    Year,
    Plate,
    Color,
    Mileage,
    Price,
    Status,
}

#[derive(Debug)]
pub struct FormScreen {
    mode: FormMode,
    phase: FormPhase,
    fields: VehicleInput,
    submit_error: Option<String>,
    generation: u64,
}

/// Defaults for a blank create form.
fn default_fields() -> VehicleInput {
    VehicleInput {
        brand: String::new(),
        model: String::new(),
        year: Utc::now().year(),
        plate: String::new(),
        color: String::new(),
        mileage: 0.0,
        price: 0.0,
        status: VehicleStatus::Available,
    }
}

impl FormScreen {
    /// Build the screen for the current route. Returns the edit-mode preload
    /// request when there is one; create mode goes straight to editing.
    pub fn from_route(
        client: &VehicleClient,
        id_param: Option<&str>,
    ) -> (Self, Option<(u64, HttpRequest)>) {
        let Some(raw) = id_param else {
            let screen = Self {
                mode: FormMode::Create,
                phase: FormPhase::Editing,
                fields: default_fields(),
                submit_error: None,
                generation: 0,
            };
            return (screen, None);
        };
        let Ok(id) = raw.parse::<i64>() else {
            let screen = Self {
                mode: FormMode::Create,
                phase: FormPhase::Errored(format!("invalid identifier: {raw}")),
                fields: default_fields(),
                submit_error: None,
                generation: 0,
            };
            return (screen, None);
        };
        let screen = Self {
            mode: FormMode::Edit(id),
            phase: FormPhase::Loading,
            fields: default_fields(),
            submit_error: None,
            generation: 1,
        };
        debug!("form: preloading vehicle {id} for edit");
        let request = client.build_get_vehicle(id);
        (screen, Some((1, request)))
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn fields(&self) -> &VehicleInput {
        &self.fields
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Whether the plate field is locked. Always true in edit mode.
    pub fn plate_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Apply the edit-mode preload response. The fetched record populates
    /// the editable field set wholesale.
    pub fn resolve_load(&mut self, client: &VehicleClient, generation: u64, response: HttpResponse) {
        if generation != self.generation {
            debug!("form: discarding stale preload (generation {generation})");
            return;
        }
        if self.phase != FormPhase::Loading {
            return;
        }
        match client.parse_get_vehicle(response) {
            Ok(vehicle) => {
                self.fields = vehicle.to_input();
                self.phase = FormPhase::Editing;
            }
            Err(err) => {
                error!("form: failed to preload vehicle for edit: {err}");
                self.phase = FormPhase::Errored(err.to_string());
            }
        }
    }

    /// Apply one field change from the raw form value. Numeric fields
    /// coerce through parsing, with unparseable text collapsing to zero the
    /// way an empty numeric input does. Plate edits are refused in edit
    /// mode; an out-of-set status value is refused outright.
    pub fn handle_change(&mut self, field: FormField, value: &str) {
        if !matches!(self.phase, FormPhase::Editing) {
            return;
        }
        match field {
            FormField::Brand => self.fields.brand = value.to_string(),
            FormField::Model => self.fields.model = value.to_string(),
            FormField::Year => self.fields.year = value.parse().unwrap_or(0),
            FormField::Plate => {
                if self.plate_locked() {
                    warn!("form: ignoring plate change in edit mode");
                } else {
                    self.fields.plate = value.to_string();
                }
            }
            FormField::Color => self.fields.color = value.to_string(),
            FormField::Mileage => self.fields.mileage = value.parse().unwrap_or(0.0),
            FormField::Price => self.fields.price = value.parse().unwrap_or(0.0),
            FormField::Status => match VehicleStatus::parse(value) {
                Some(status) => self.fields.status = status,
                None => warn!("form: ignoring unknown status value {value:?}"),
            },
        }
    }

    /// Submit the form. Emits the create or update request per mode, or
    /// `None` when the form is not in an editable phase — a second submit
    /// while one is in flight is a no-op.
    pub fn submit(&mut self, client: &VehicleClient) -> Option<HttpRequest> {
        if !matches!(self.phase, FormPhase::Editing) {
            return None;
        }
        self.submit_error = None;
        let built = match self.mode {
            FormMode::Create => client.build_create_vehicle(&self.fields),
            FormMode::Edit(id) => {
                client.build_update_vehicle(id, &UpdateVehicle::from(self.fields.clone()))
            }
        };
        match built {
            Ok(request) => {
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(err) => {
                error!("form: failed to build submit request: {err}");
                self.submit_error = Some(err.to_string());
                None
            }
        }
    }

    /// Apply the submit response. On success returns the route to navigate
    /// to (back to the list); on failure the form returns to editing with
    /// every entered value intact and the message held for display.
    pub fn resolve_submit(
        &mut self,
        client: &VehicleClient,
        response: HttpResponse,
    ) -> Option<Route> {
        if self.phase != FormPhase::Submitting {
            return None;
        }
        let result = match self.mode {
            FormMode::Create => client.parse_create_vehicle(response),
            FormMode::Edit(_) => client.parse_update_vehicle(response),
        };
        match result {
            Ok(vehicle) => {
                debug!("form: saved vehicle {}", vehicle.id);
                self.phase = FormPhase::Editing;
                Some(Route::VehicleList)
            }
            Err(err) => {
                error!("form: failed to save vehicle: {err}");
                self.phase = FormPhase::Editing;
                self.submit_error = Some(err.to_string());
                None
            }
        }
    }
}
