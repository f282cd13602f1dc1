use crate::models::driver::Driver;
use crate::models::payment::Payment;
use crate::models::route::Route;

/// Display name resolution for a booking's driver reference. Dangling ids
/// are legal (drivers can be deleted underneath their bookings), so this
/// resolves to a sentinel instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverName {
    Unassigned,
    Unknown,
    Found(String),
}

pub fn driver_name(drivers: &[Driver], driver_id: Option<&str>) -> DriverName {
    let Some(id) = driver_id else {
        return DriverName::Unassigned;
    };

    drivers
        .iter()
        .find(|driver| driver.id == id)
        .map(|driver| DriverName::Found(format!("{} {}", driver.name, driver.surname)))
        .unwrap_or(DriverName::Unknown)
}

pub fn routes_for_driver<'a>(routes: &'a [Route], driver_id: &str) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| route.driver_id == driver_id)
        .collect()
}

pub fn payments_for_driver<'a>(payments: &'a [Payment], driver_id: &str) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|payment| payment.driver_id == driver_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DriverName, driver_name, payments_for_driver, routes_for_driver};
    use crate::models::driver::Driver;
    use crate::models::payment::{Payment, PaymentStatus, PaymentType};
    use crate::models::route::{Route, RouteStatus};

    fn driver(id: &str, name: &str, surname: &str) -> Driver {
        Driver {
            id: id.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            tax_id: "123".to_string(),
            salary: 1000.0,
            routes_completed: 0,
            last_payment: None,
        }
    }

    fn route(id: &str, driver_id: &str) -> Route {
        Route {
            id: id.to_string(),
            driver_id: driver_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            origin: "A".to_string(),
            destination: "B".to_string(),
            distance: 10.0,
            duration: 20,
            status: RouteStatus::Completed,
            booking_id: "b1".to_string(),
        }
    }

    fn payment(id: &str, driver_id: &str) -> Payment {
        Payment {
            id: id.to_string(),
            driver_id: driver_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount: 1200.0,
            kind: PaymentType::Salary,
            reference: "ref".to_string(),
            status: PaymentStatus::Paid,
        }
    }

    #[test]
    fn missing_reference_resolves_to_unassigned() {
        let drivers = vec![driver("d1", "Nikos", "Pappas")];
        assert_eq!(driver_name(&drivers, None), DriverName::Unassigned);
    }

    #[test]
    fn dangling_reference_resolves_to_unknown() {
        let drivers = vec![driver("d1", "Nikos", "Pappas")];
        assert_eq!(driver_name(&drivers, Some("d9")), DriverName::Unknown);
    }

    #[test]
    fn known_reference_resolves_to_full_name() {
        let drivers = vec![driver("d1", "Nikos", "Pappas")];
        assert_eq!(
            driver_name(&drivers, Some("d1")),
            DriverName::Found("Nikos Pappas".to_string())
        );
    }

    #[test]
    fn groupings_filter_by_driver() {
        let routes = vec![route("r1", "d1"), route("r2", "d2"), route("r3", "d1")];
        let payments = vec![payment("p1", "d2"), payment("p2", "d1")];

        let d1_routes = routes_for_driver(&routes, "d1");
        assert_eq!(d1_routes.len(), 2);
        assert_eq!(d1_routes[0].id, "r1");

        let d1_payments = payments_for_driver(&payments, "d1");
        assert_eq!(d1_payments.len(), 1);
        assert_eq!(d1_payments[0].id, "p2");
    }
}
