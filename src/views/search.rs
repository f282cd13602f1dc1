use crate::models::booking::Booking;
use crate::models::driver::Driver;
use crate::models::hotel::Hotel;

// Case-insensitive substring filters over the fields each list page
// searches. An empty term matches everything; relative order is preserved.

pub fn filter_bookings<'a>(bookings: &'a [Booking], term: &str) -> Vec<&'a Booking> {
    let needle = term.to_lowercase();
    bookings
        .iter()
        .filter(|booking| {
            matches(&booking.client.name, &needle)
                || matches(&booking.origin, &needle)
                || matches(&booking.destination, &needle)
                || booking
                    .booking_code
                    .as_deref()
                    .is_some_and(|code| matches(code, &needle))
        })
        .collect()
}

pub fn filter_hotels<'a>(hotels: &'a [Hotel], term: &str) -> Vec<&'a Hotel> {
    let needle = term.to_lowercase();
    hotels
        .iter()
        .filter(|hotel| {
            matches(&hotel.name, &needle)
                || matches(&hotel.code, &needle)
                || matches(&hotel.city, &needle)
        })
        .collect()
}

pub fn filter_drivers<'a>(drivers: &'a [Driver], term: &str) -> Vec<&'a Driver> {
    let needle = term.to_lowercase();
    drivers
        .iter()
        .filter(|driver| {
            matches(&driver.name, &needle)
                || matches(&driver.surname, &needle)
                || matches(&driver.tax_id, &needle)
        })
        .collect()
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{filter_bookings, filter_drivers, filter_hotels};
    use crate::models::booking::{
        Booking, BookingStatus, BookingType, Client, ClientTitle, Passengers, PaymentOption,
    };
    use crate::models::driver::Driver;
    use crate::models::hotel::Hotel;

    fn booking(id: &str, name: &str, origin: &str, destination: &str, code: Option<&str>) -> Booking {
        Booking {
            id: id.to_string(),
            booking_type: BookingType::Transfer,
            origin: origin.to_string(),
            destination: destination.to_string(),
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
            booking_code: code.map(str::to_string),
            comments: None,
            payment_option: PaymentOption::Client,
            voucher_number: None,
            display_sign: false,
            created_at: NaiveDate::from_ymd_opt(2025, 4, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            status: BookingStatus::Pending,
            driver_id: None,
        }
    }

    fn hotel(id: &str, name: &str, code: &str, city: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            has_atm: false,
            employees: 10,
            email: "h@example.com".to_string(),
            tax_info: "tax".to_string(),
            city: city.to_string(),
            zip_code: "10000".to_string(),
            business_type: "hotel".to_string(),
            country: "GR".to_string(),
            phone: "+30".to_string(),
            fax: None,
            website: None,
            last_login: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn driver(id: &str, name: &str, surname: &str, tax_id: &str) -> Driver {
        Driver {
            id: id.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            tax_id: tax_id.to_string(),
            salary: 1000.0,
            routes_completed: 0,
            last_payment: None,
        }
    }

    #[test]
    fn booking_search_is_case_insensitive() {
        let bookings = vec![
            booking("b1", "Alice", "Airport", "Grand Hotel", None),
            booking("b2", "Bob", "Marina", "Airport", None),
        ];

        let hits = filter_bookings(&bookings, "AIRPORT");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn booking_search_matches_optional_code() {
        let bookings = vec![
            booking("b1", "Alice", "Airport", "Grand Hotel", Some("BK777")),
            booking("b2", "Bob", "Marina", "Harbour", None),
        ];

        let hits = filter_bookings(&bookings, "bk77");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b1");
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let bookings = vec![
            booking("b1", "Alice", "Airport", "Grand Hotel", None),
            booking("b2", "Bob", "Marina", "Harbour", None),
        ];

        let hits = filter_bookings(&bookings, "");
        let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2"]);
    }

    #[test]
    fn hotel_search_covers_name_code_and_city() {
        let hotels = vec![
            hotel("h1", "Grand Hotel", "GH001", "Athens"),
            hotel("h2", "Seaside Resort", "SR002", "Piraeus"),
        ];

        assert_eq!(filter_hotels(&hotels, "gh0")[0].id, "h1");
        assert_eq!(filter_hotels(&hotels, "piraeus")[0].id, "h2");
        assert_eq!(filter_hotels(&hotels, "nowhere").len(), 0);
    }

    #[test]
    fn driver_search_covers_surname_and_tax_id() {
        let drivers = vec![
            driver("d1", "Nikos", "Pappas", "123456789"),
            driver("d2", "Eleni", "Makri", "987654321"),
        ];

        assert_eq!(filter_drivers(&drivers, "makri")[0].id, "d2");
        assert_eq!(filter_drivers(&drivers, "12345")[0].id, "d1");
    }
}
