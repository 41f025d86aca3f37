//! Route table for the four screens plus the unmatched-path fallback.
//!
//! The routing shell is a black box to this crate; what it owes the screens
//! is exactly this mapping. The `{id}` segment is carried as the raw string
//! the shell extracted — the consuming screen parses it as an integer, so a
//! garbage segment fails at the screen boundary rather than here.

/// The screens this application navigates between.
///
/// `parse` and `to_path` are inverses for every variant except `NotFound`,
/// which keeps the original path for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the vehicle list.
    VehicleList,
    /// `/vehicles/new` — the create form.
    VehicleNew,
    /// `/vehicles/edit/{id}` — the edit form.
    VehicleEdit(String),
    /// `/vehicles/{id}` — the read-only detail view.
    VehicleDetail(String),
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Match a URL path against the route table. Literal segments win over
    /// parameterized ones, so `/vehicles/new` is never mistaken for a detail
    /// route with id `"new"`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::VehicleList;
        }
        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["vehicles", "new"] => Route::VehicleNew,
            ["vehicles", "edit", id] => Route::VehicleEdit((*id).to_string()),
            ["vehicles", id] => Route::VehicleDetail((*id).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Render the path for a navigable link or programmatic navigation.
    pub fn to_path(&self) -> String {
        match self {
            Route::VehicleList => "/".to_string(),
            Route::VehicleNew => "/vehicles/new".to_string(),
            Route::VehicleEdit(id) => format!("/vehicles/edit/{id}"),
            Route::VehicleDetail(id) => format!("/vehicles/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// The raw `{id}` segment, for the screens that take one.
    pub fn id_param(&self) -> Option<&str> {
        match self {
            Route::VehicleEdit(id) | Route::VehicleDetail(id) => Some(id),
            _ => None,
        }
    }
}
