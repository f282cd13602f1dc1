use chrono::{NaiveDate, NaiveDateTime};

use crate::models::booking::{
    Booking, BookingStatus, BookingType, Client, ClientTitle, Passengers, PaymentOption,
};
use crate::models::driver::Driver;
use crate::models::hotel::Hotel;
use crate::models::payment::{Payment, PaymentStatus, PaymentType};
use crate::models::route::{Route, RouteStatus};
use crate::store::AppState;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid seed time")
}

/// Starter dataset used when no snapshot exists yet, so a fresh install is
/// usable immediately.
pub fn sample_state() -> AppState {
    AppState {
        bookings: sample_bookings(),
        hotels: sample_hotels(),
        drivers: sample_drivers(),
        routes: sample_routes(),
        payments: sample_payments(),
    }
}

fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "b1".to_string(),
            booking_type: BookingType::Arrival,
            origin: "Αεροδρόμιο Αθηνών".to_string(),
            destination: "Grand Hotel".to_string(),
            pickup_date: date(2025, 3, 15),
            departure_time: "14:30".to_string(),
            room_number: Some("301".to_string()),
            flight_time: Some("13:45".to_string()),
            flight_number: Some("A3-1821".to_string()),
            passengers: Passengers {
                adults: 2,
                children: 1,
                infants: 0,
            },
            client: Client {
                title: ClientTitle::Mr,
                name: "Γιάννης Παπαδόπουλος".to_string(),
                id_number: Some("ΑΚ123456".to_string()),
                email: "giannis@example.com".to_string(),
                phone: "+30 6912345678".to_string(),
                nationality: "Ελληνική".to_string(),
            },
            booking_code: Some("BK12345".to_string()),
            comments: Some("Παρακαλώ να υπάρχει παιδικό κάθισμα".to_string()),
            payment_option: PaymentOption::Client,
            voucher_number: Some("V12345".to_string()),
            display_sign: true,
            created_at: datetime(2025, 3, 10, 10, 30),
            status: BookingStatus::Confirmed,
            driver_id: None,
        },
        Booking {
            id: "b2".to_string(),
            booking_type: BookingType::Departure,
            origin: "Seaside Resort".to_string(),
            destination: "Αεροδρόμιο Αθηνών".to_string(),
            pickup_date: date(2025, 3, 16),
            departure_time: "10:00".to_string(),
            room_number: Some("205".to_string()),
            flight_time: Some("13:20".to_string()),
            flight_number: Some("LH-1835".to_string()),
            passengers: Passengers {
                adults: 2,
                children: 0,
                infants: 0,
            },
            client: Client {
                title: ClientTitle::Mrs,
                name: "Μαρία Κωνσταντίνου".to_string(),
                id_number: None,
                email: "maria@example.com".to_string(),
                phone: "+30 6987654321".to_string(),
                nationality: "Ελληνική".to_string(),
            },
            booking_code: None,
            comments: None,
            payment_option: PaymentOption::Accounting,
            voucher_number: Some("V12346".to_string()),
            display_sign: false,
            created_at: datetime(2025, 3, 11, 9, 15),
            status: BookingStatus::Confirmed,
            driver_id: None,
        },
        Booking {
            id: "b3".to_string(),
            booking_type: BookingType::Transfer,
            origin: "Grand Hotel".to_string(),
            destination: "City Center Inn".to_string(),
            pickup_date: date(2025, 3, 17),
            departure_time: "11:30".to_string(),
            room_number: Some("412".to_string()),
            flight_time: None,
            flight_number: None,
            passengers: Passengers {
                adults: 1,
                children: 0,
                infants: 0,
            },
            client: Client {
                title: ClientTitle::Mr,
                name: "Δημήτρης Αντωνίου".to_string(),
                id_number: None,
                email: "dimitris@example.com".to_string(),
                phone: "+30 6932145678".to_string(),
                nationality: "Ελληνική".to_string(),
            },
            booking_code: None,
            comments: None,
            payment_option: PaymentOption::Complimentary,
            voucher_number: None,
            display_sign: false,
            created_at: datetime(2025, 3, 12, 14, 20),
            status: BookingStatus::Pending,
            driver_id: None,
        },
    ]
}

fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "h1".to_string(),
            name: "Grand Hotel".to_string(),
            code: "GH001".to_string(),
            has_atm: true,
            employees: 120,
            email: "info@grandhotel.com".to_string(),
            tax_info: "ΔΟΥ Αθηνών".to_string(),
            city: "Αθήνα".to_string(),
            zip_code: "10431".to_string(),
            business_type: "Ξενοδοχείο".to_string(),
            country: "Ελλάδα".to_string(),
            phone: "+30 210 1234567".to_string(),
            fax: Some("+30 210 1234568".to_string()),
            website: Some("www.grandhotel.com".to_string()),
            last_login: datetime(2025, 3, 10, 14, 30),
        },
        Hotel {
            id: "h2".to_string(),
            name: "Seaside Resort".to_string(),
            code: "SR002".to_string(),
            has_atm: false,
            employees: 85,
            email: "contact@seasideresort.com".to_string(),
            tax_info: "ΔΟΥ Πειραιά".to_string(),
            city: "Πειραιάς".to_string(),
            zip_code: "18536".to_string(),
            business_type: "Θέρετρο".to_string(),
            country: "Ελλάδα".to_string(),
            phone: "+30 210 5678901".to_string(),
            fax: Some("+30 210 5678902".to_string()),
            website: Some("www.seasideresort.com".to_string()),
            last_login: datetime(2025, 3, 9, 9, 15),
        },
        Hotel {
            id: "h3".to_string(),
            name: "City Center Inn".to_string(),
            code: "CCI003".to_string(),
            has_atm: true,
            employees: 45,
            email: "info@citycenterinn.com".to_string(),
            tax_info: "ΔΟΥ Θεσσαλονίκης".to_string(),
            city: "Θεσσαλονίκη".to_string(),
            zip_code: "54624".to_string(),
            business_type: "Ξενοδοχείο".to_string(),
            country: "Ελλάδα".to_string(),
            phone: "+30 2310 123456".to_string(),
            fax: Some("+30 2310 123457".to_string()),
            website: Some("www.citycenterinn.com".to_string()),
            last_login: datetime(2025, 3, 8, 16, 45),
        },
    ]
}

fn sample_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: "d1".to_string(),
            name: "Γιάννης".to_string(),
            surname: "Παπαδόπουλος".to_string(),
            tax_id: "123456789".to_string(),
            salary: 1200.0,
            routes_completed: 128,
            last_payment: Some(date(2025, 3, 1)),
        },
        Driver {
            id: "d2".to_string(),
            name: "Μαρία".to_string(),
            surname: "Γεωργίου".to_string(),
            tax_id: "987654321".to_string(),
            salary: 1300.0,
            routes_completed: 156,
            last_payment: Some(date(2025, 3, 1)),
        },
        Driver {
            id: "d3".to_string(),
            name: "Δημήτρης".to_string(),
            surname: "Αντωνίου".to_string(),
            tax_id: "456789123".to_string(),
            salary: 1150.0,
            routes_completed: 112,
            last_payment: Some(date(2025, 3, 1)),
        },
    ]
}

fn sample_routes() -> Vec<Route> {
    vec![
        Route {
            id: "r1".to_string(),
            driver_id: "d1".to_string(),
            date: date(2025, 3, 15),
            origin: "Αεροδρόμιο Αθηνών".to_string(),
            destination: "Grand Hotel".to_string(),
            distance: 32.5,
            duration: 45,
            status: RouteStatus::Completed,
            booking_id: "b1".to_string(),
        },
        Route {
            id: "r2".to_string(),
            driver_id: "d2".to_string(),
            date: date(2025, 3, 16),
            origin: "Seaside Resort".to_string(),
            destination: "Αεροδρόμιο Αθηνών".to_string(),
            distance: 28.3,
            duration: 38,
            status: RouteStatus::Pending,
            booking_id: "b2".to_string(),
        },
    ]
}

fn sample_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "p1".to_string(),
            driver_id: "d1".to_string(),
            date: date(2025, 3, 1),
            amount: 1200.0,
            kind: PaymentType::Salary,
            reference: "ΠΛΗ10001".to_string(),
            status: PaymentStatus::Paid,
        },
        Payment {
            id: "p2".to_string(),
            driver_id: "d2".to_string(),
            date: date(2025, 3, 1),
            amount: 1300.0,
            kind: PaymentType::Salary,
            reference: "ΠΛΗ10002".to_string(),
            status: PaymentStatus::Paid,
        },
    ]
}
