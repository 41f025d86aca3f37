//! Screen state machines driven end-to-end against the live mock server.
//!
//! Each test plays the host: it takes the requests a screen emits, executes
//! them over real HTTP, and feeds the responses back in, walking the same
//! loops a UI shell would.

mod common;

use common::{execute, start_server};
use rentcars_core::{
    DetailScreen, FormField, FormScreen, ListScreen, Route, VehicleClient, VehicleInput,
    VehicleStatus,
};

fn seed_vehicle(client: &VehicleClient, plate: &str, model: &str) -> i64 {
    let input = VehicleInput {
        brand: "Toyota".to_string(),
        model: model.to_string(),
        year: 2023,
        plate: plate.to_string(),
        color: "blue".to_string(),
        mileage: 0.0,
        price: 95_000.0,
        status: VehicleStatus::Available,
    };
    let req = client.build_create_vehicle(&input).unwrap();
    client.parse_create_vehicle(execute(req)).unwrap().id
}

#[test]
fn list_screen_loads_and_deletes_with_confirmation() {
    let client = start_server();
    let first = seed_vehicle(&client, "AAA1111", "Corolla");
    let second = seed_vehicle(&client, "BBB2222", "Yaris");

    let mut screen = ListScreen::new();
    let (generation, req) = screen.start_load(&client);
    screen.resolve_load(&client, generation, execute(req));
    assert_eq!(screen.vehicles().ready().unwrap().len(), 2);

    // Confirmed delete removes the record locally, without a refetch.
    screen.request_delete(first);
    let req = screen.confirm_delete(&client).unwrap();
    screen.resolve_delete(&client, execute(req));
    let vehicles = screen.vehicles().ready().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, second);
    assert!(screen.delete_error().is_none());

    // The server agrees.
    let req = client.build_list_vehicles();
    let remaining = client.parse_list_vehicles(execute(req)).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
}

#[test]
fn list_screen_failed_delete_keeps_the_record() {
    let client = start_server();
    let id = seed_vehicle(&client, "AAA1111", "Corolla");

    let mut screen = ListScreen::new();
    let (generation, req) = screen.start_load(&client);
    screen.resolve_load(&client, generation, execute(req));

    // Delete the record behind the screen's back, then let the screen try.
    let req = client.build_delete_vehicle(id);
    client.parse_delete_vehicle(execute(req)).unwrap();

    screen.request_delete(id);
    let req = screen.confirm_delete(&client).unwrap();
    screen.resolve_delete(&client, execute(req));

    // The delete failed with 404; the in-memory list is unchanged.
    assert_eq!(screen.vehicles().ready().unwrap().len(), 1);
    assert_eq!(screen.delete_error(), Some("HTTP 404 Not Found"));
}

#[test]
fn detail_screen_loads_the_routed_vehicle() {
    let client = start_server();
    let id = seed_vehicle(&client, "AAA1111", "Corolla");

    let route = Route::parse(&format!("/vehicles/{id}"));
    let mut screen = DetailScreen::new();
    let (generation, req) = screen.load(&client, route.id_param()).unwrap();
    screen.resolve(&client, generation, execute(req));

    let vehicle = screen.vehicle().ready().unwrap();
    assert_eq!(vehicle.id, id);
    assert_eq!(vehicle.model, "Corolla");
}

#[test]
fn detail_screen_without_identifier_makes_no_request() {
    let client = start_server();
    let mut screen = DetailScreen::new();
    assert!(screen.load(&client, Route::VehicleList.id_param()).is_none());
    assert_eq!(screen.vehicle().error(), Some("identifier not provided"));
}

#[test]
fn form_screen_creates_a_vehicle_and_navigates_back() {
    let client = start_server();

    let (mut screen, load) = FormScreen::from_route(&client, None);
    assert!(load.is_none());

    screen.handle_change(FormField::Brand, "Toyota");
    screen.handle_change(FormField::Model, "Corolla");
    screen.handle_change(FormField::Year, "2023");
    screen.handle_change(FormField::Plate, "ABC1234");
    screen.handle_change(FormField::Color, "blue");
    screen.handle_change(FormField::Price, "95000.00");

    let req = screen.submit(&client).unwrap();
    assert!(screen.submit(&client).is_none(), "no duplicate submit");
    let destination = screen.resolve_submit(&client, execute(req));
    assert_eq!(destination, Some(Route::VehicleList));

    let req = client.build_list_vehicles();
    let vehicles = client.parse_list_vehicles(execute(req)).unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].plate, "ABC1234");
    assert_eq!(vehicles[0].price, 95_000.0);
}

#[test]
fn form_screen_edits_without_touching_the_plate() {
    let client = start_server();
    let id = seed_vehicle(&client, "AAA1111", "Corolla");

    let route = Route::parse(&format!("/vehicles/edit/{id}"));
    let (mut screen, load) = FormScreen::from_route(&client, route.id_param());
    let (generation, req) = load.unwrap();
    screen.resolve_load(&client, generation, execute(req));
    assert!(screen.plate_locked());

    screen.handle_change(FormField::Status, "rented");
    screen.handle_change(FormField::Plate, "HACKED1"); // refused

    let req = screen.submit(&client).unwrap();
    let destination = screen.resolve_submit(&client, execute(req));
    assert_eq!(destination, Some(Route::VehicleList));

    let req = client.build_get_vehicle(id);
    let vehicle = client.parse_get_vehicle(execute(req)).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Rented);
    assert_eq!(vehicle.plate, "AAA1111");
    assert_eq!(vehicle.price, 95_000.0);
}

#[test]
fn form_screen_surfaces_duplicate_plate_and_recovers() {
    let client = start_server();
    seed_vehicle(&client, "AAA1111", "Corolla");

    let (mut screen, _) = FormScreen::from_route(&client, None);
    screen.handle_change(FormField::Brand, "Toyota");
    screen.handle_change(FormField::Model, "Yaris");
    screen.handle_change(FormField::Plate, "AAA1111");

    let req = screen.submit(&client).unwrap();
    let destination = screen.resolve_submit(&client, execute(req));
    assert!(destination.is_none());
    assert_eq!(screen.submit_error(), Some("HTTP 409 Conflict"));
    assert_eq!(screen.fields().model, "Yaris"); // entered values intact

    // Correct the plate and resubmit.
    screen.handle_change(FormField::Plate, "BBB2222");
    let req = screen.submit(&client).unwrap();
    let destination = screen.resolve_submit(&client, execute(req));
    assert_eq!(destination, Some(Route::VehicleList));
}
