pub mod input;
mod seed;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::driver::Driver;
use crate::models::hotel::Hotel;
use crate::models::payment::Payment;
use crate::models::route::Route;
use crate::storage::KeyValueStorage;
use crate::store::input::{
    BookingPatch, DriverPatch, HotelPatch, NewBooking, NewDriver, NewHotel, NewPayment, NewRoute,
};

pub const STATE_KEY: &str = "taxiAppState";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub bookings: Vec<Booking>,
    pub hotels: Vec<Hotel>,
    pub drivers: Vec<Driver>,
    pub routes: Vec<Route>,
    pub payments: Vec<Payment>,
}

// Next id is "<prefix><table_len + 1>". Carried over from the snapshot
// format this store must stay compatible with: after a delete, the next add
// repeats a freed id. See DESIGN.md.
fn next_id(prefix: &str, table_len: usize) -> String {
    format!("{prefix}{}", table_len + 1)
}

/// Single source of truth for the five entity tables.
///
/// Every mutation is applied in memory first and then written through as one
/// full JSON snapshot. A storage failure propagates to the caller, but the
/// in-memory change stays applied, so readers in the same session keep a
/// correct view. The store never validates fields or foreign keys; that is
/// the calling form layer's contract, and dangling references (for example a
/// route whose driver was deleted) are expected.
pub struct EntityStore {
    state: AppState,
    storage: Box<dyn KeyValueStorage>,
}

impl EntityStore {
    /// Loads the persisted snapshot verbatim, or seeds and persists the
    /// built-in sample dataset on first start.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> Result<Self, AppError> {
        match storage.load(STATE_KEY)? {
            Some(raw) => {
                let state = serde_json::from_str(&raw)?;
                Ok(Self { state, storage })
            }
            None => {
                let store = Self {
                    state: seed::sample_state(),
                    storage,
                };
                store.persist()?;
                info!("no snapshot found; seeded sample dataset");
                Ok(store)
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn add_booking(&mut self, new: NewBooking) -> Result<Booking, AppError> {
        let booking = Booking {
            id: next_id("b", self.state.bookings.len()),
            booking_type: new.booking_type,
            origin: new.origin,
            destination: new.destination,
            pickup_date: new.pickup_date,
            departure_time: new.departure_time,
            room_number: new.room_number,
            flight_time: new.flight_time,
            flight_number: new.flight_number,
            passengers: new.passengers,
            client: new.client,
            booking_code: new.booking_code,
            comments: new.comments,
            payment_option: new.payment_option,
            voucher_number: new.voucher_number,
            display_sign: new.display_sign,
            created_at: Utc::now().naive_utc(),
            status: BookingStatus::Pending,
            driver_id: new.driver_id,
        };

        self.state.bookings.push(booking.clone());
        info!(booking_id = %booking.id, "booking created");
        self.persist()?;
        Ok(booking)
    }

    pub fn add_hotel(&mut self, new: NewHotel) -> Result<Hotel, AppError> {
        let hotel = Hotel {
            id: next_id("h", self.state.hotels.len()),
            name: new.name,
            code: new.code,
            has_atm: new.has_atm,
            employees: new.employees,
            email: new.email,
            tax_info: new.tax_info,
            city: new.city,
            zip_code: new.zip_code,
            business_type: new.business_type,
            country: new.country,
            phone: new.phone,
            fax: new.fax,
            website: new.website,
            last_login: Utc::now().naive_utc(),
        };

        self.state.hotels.push(hotel.clone());
        info!(hotel_id = %hotel.id, "hotel created");
        self.persist()?;
        Ok(hotel)
    }

    pub fn add_driver(&mut self, new: NewDriver) -> Result<Driver, AppError> {
        let driver = Driver {
            id: next_id("d", self.state.drivers.len()),
            name: new.name,
            surname: new.surname,
            tax_id: new.tax_id,
            salary: new.salary,
            routes_completed: 0,
            last_payment: Some(Utc::now().date_naive()),
        };

        self.state.drivers.push(driver.clone());
        info!(driver_id = %driver.id, "driver created");
        self.persist()?;
        Ok(driver)
    }

    pub fn add_route(&mut self, new: NewRoute) -> Result<Route, AppError> {
        let route = Route {
            id: next_id("r", self.state.routes.len()),
            driver_id: new.driver_id,
            date: new.date,
            origin: new.origin,
            destination: new.destination,
            distance: new.distance,
            duration: new.duration,
            status: new.status,
            booking_id: new.booking_id,
        };

        self.state.routes.push(route.clone());
        info!(route_id = %route.id, "route created");
        self.persist()?;
        Ok(route)
    }

    pub fn add_payment(&mut self, new: NewPayment) -> Result<Payment, AppError> {
        let payment = Payment {
            id: next_id("p", self.state.payments.len()),
            driver_id: new.driver_id,
            date: new.date,
            amount: new.amount,
            kind: new.kind,
            reference: new.reference,
            status: new.status,
        };

        self.state.payments.push(payment.clone());
        info!(payment_id = %payment.id, "payment created");
        self.persist()?;
        Ok(payment)
    }

    pub fn update_booking(&mut self, id: &str, patch: BookingPatch) -> Result<(), AppError> {
        match self.state.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                patch.apply(booking);
                info!(booking_id = %id, "booking updated");
            }
            None => debug!(booking_id = %id, "update for unknown booking ignored"),
        }
        self.persist()
    }

    pub fn update_hotel(&mut self, id: &str, patch: HotelPatch) -> Result<(), AppError> {
        match self.state.hotels.iter_mut().find(|h| h.id == id) {
            Some(hotel) => {
                patch.apply(hotel);
                info!(hotel_id = %id, "hotel updated");
            }
            None => debug!(hotel_id = %id, "update for unknown hotel ignored"),
        }
        self.persist()
    }

    pub fn update_driver(&mut self, id: &str, patch: DriverPatch) -> Result<(), AppError> {
        match self.state.drivers.iter_mut().find(|d| d.id == id) {
            Some(driver) => {
                patch.apply(driver);
                info!(driver_id = %id, "driver updated");
            }
            None => debug!(driver_id = %id, "update for unknown driver ignored"),
        }
        self.persist()
    }

    pub fn delete_booking(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.state.bookings.len();
        self.state.bookings.retain(|b| b.id != id);
        if self.state.bookings.len() < before {
            info!(booking_id = %id, "booking deleted");
        } else {
            debug!(booking_id = %id, "delete for unknown booking ignored");
        }
        self.persist()
    }

    pub fn delete_hotel(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.state.hotels.len();
        self.state.hotels.retain(|h| h.id != id);
        if self.state.hotels.len() < before {
            info!(hotel_id = %id, "hotel deleted");
        } else {
            debug!(hotel_id = %id, "delete for unknown hotel ignored");
        }
        self.persist()
    }

    // Routes and payments referencing the driver are left as-is; readers
    // resolve the dangling id to "unknown".
    pub fn delete_driver(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.state.drivers.len();
        self.state.drivers.retain(|d| d.id != id);
        if self.state.drivers.len() < before {
            info!(driver_id = %id, "driver deleted");
        } else {
            debug!(driver_id = %id, "delete for unknown driver ignored");
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string(&self.state)?;
        self.storage.save(STATE_KEY, &payload)
    }
}
