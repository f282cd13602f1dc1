use std::path::Path;

use chrono::NaiveDate;

use taxi_admin::feed::{DEFAULT_CAP, NotificationFeed};
use taxi_admin::models::booking::{
    BookingStatus, BookingType, Client, ClientTitle, Passengers, PaymentOption,
};
use taxi_admin::models::payment::{PaymentStatus, PaymentType};
use taxi_admin::models::route::RouteStatus;
use taxi_admin::storage::JsonFileStorage;
use taxi_admin::store::EntityStore;
use taxi_admin::store::input::{BookingPatch, NewBooking, NewPayment, NewRoute};
use taxi_admin::views::lookup::{DriverName, driver_name};
use taxi_admin::views::overview::overview;
use taxi_admin::views::search::filter_bookings;

fn open_store(dir: &Path) -> EntityStore {
    EntityStore::open(Box::new(JsonFileStorage::new(dir))).unwrap()
}

fn new_booking(name: &str) -> NewBooking {
    NewBooking {
        booking_type: BookingType::Transfer,
        origin: "X".to_string(),
        destination: "Y".to_string(),
        pickup_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        departure_time: "09:00".to_string(),
        room_number: None,
        flight_time: None,
        flight_number: None,
        passengers: Passengers {
            adults: 1,
            children: 0,
            infants: 0,
        },
        client: Client {
            title: ClientTitle::Mr,
            name: name.to_string(),
            id_number: None,
            email: "t@example.com".to_string(),
            phone: "123".to_string(),
            nationality: "Greek".to_string(),
        },
        booking_code: None,
        comments: None,
        payment_option: PaymentOption::Client,
        voucher_number: None,
        display_sign: false,
        driver_id: None,
    }
}

#[test]
fn first_start_seeds_and_persists_the_sample_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());

    assert_eq!(store.state().bookings.len(), 3);
    assert!(dir.path().join("taxiAppState.json").exists());

    // a second handle sees the seeded snapshot, not a fresh seed pass
    let reopened = open_store(dir.path());
    assert_eq!(reopened.state(), store.state());
}

#[test]
fn snapshot_round_trips_field_for_field_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = open_store(dir.path());
    let created = store.add_booking(new_booking("Test")).unwrap();
    assert_eq!(created.id, "b4");
    store
        .update_booking(
            "b4",
            BookingPatch {
                status: Some(BookingStatus::Confirmed),
                driver_id: Some("d2".to_string()),
                ..BookingPatch::default()
            },
        )
        .unwrap();
    store
        .add_route(NewRoute {
            driver_id: "d2".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            origin: "X".to_string(),
            destination: "Y".to_string(),
            distance: 12.4,
            duration: 25,
            status: RouteStatus::Pending,
            booking_id: "b4".to_string(),
        })
        .unwrap();
    store
        .add_payment(NewPayment {
            driver_id: "d2".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            amount: 150.0,
            kind: PaymentType::Bonus,
            reference: "ΠΛΗ10003".to_string(),
            status: PaymentStatus::Pending,
        })
        .unwrap();

    let reopened = open_store(dir.path());
    assert_eq!(reopened.state(), store.state());
    assert_eq!(reopened.state().routes[2].id, "r3");
    assert_eq!(reopened.state().payments[2].id, "p3");

    let ids: Vec<&str> = reopened
        .state()
        .bookings
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["b1", "b2", "b3", "b4"]);
}

#[test]
fn deleting_a_driver_dangles_references_and_readers_cope() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store
        .update_booking(
            "b1",
            BookingPatch {
                driver_id: Some("d1".to_string()),
                ..BookingPatch::default()
            },
        )
        .unwrap();
    store.delete_driver("d1").unwrap();

    let state = store.state();
    assert_eq!(state.drivers.len(), 2);
    assert_eq!(state.bookings[0].driver_id.as_deref(), Some("d1"));
    assert_eq!(state.routes[0].driver_id, "d1");

    assert_eq!(
        driver_name(&state.drivers, state.bookings[0].driver_id.as_deref()),
        DriverName::Unknown
    );
    assert_eq!(
        driver_name(&state.drivers, state.bookings[1].driver_id.as_deref()),
        DriverName::Unassigned
    );
}

#[test]
fn views_read_the_live_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.add_booking(new_booking("Searchable Client")).unwrap();

    let hits = filter_bookings(&store.state().bookings, "searchable");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b4");

    let view = overview(store.state());
    assert_eq!(view.total_bookings, 4);
    assert_eq!(view.confirmed_bookings, 2);
    // the just-added booking has the newest created_at
    assert_eq!(view.recent_bookings[0].id, "b4");
}

#[test]
fn notification_feed_lives_in_its_own_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    store.add_booking(new_booking("Feed Test")).unwrap();

    let storage = JsonFileStorage::new(dir.path());
    let mut feed = NotificationFeed::open(Box::new(storage), DEFAULT_CAP).unwrap();
    feed.sync(&store.state().bookings).unwrap();

    assert_eq!(feed.entries().len(), 4);
    assert_eq!(feed.unread_count(), 4);
    assert_eq!(feed.entries()[0].booking_id, "b4");
    assert!(dir.path().join("taxiAppNotifications.json").exists());

    // syncing a reopened feed adds nothing new
    let storage = JsonFileStorage::new(dir.path());
    let mut reopened = NotificationFeed::open(Box::new(storage), DEFAULT_CAP).unwrap();
    reopened.sync(&store.state().bookings).unwrap();
    assert_eq!(reopened.entries().len(), 4);
}
