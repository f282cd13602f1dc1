use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::booking::{
    Booking, BookingStatus, BookingType, Client, Passengers, PaymentOption,
};
use crate::models::driver::Driver;
use crate::models::hotel::Hotel;
use crate::models::payment::{PaymentStatus, PaymentType};
use crate::models::route::RouteStatus;

// Creation payloads carry everything the store does not synthesize itself.
// Field-level validation happens in the form layer before these are built.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub booking_type: BookingType,
    pub origin: String,
    pub destination: String,
    pub pickup_date: NaiveDate,
    pub departure_time: String,
    pub room_number: Option<String>,
    pub flight_time: Option<String>,
    pub flight_number: Option<String>,
    pub passengers: Passengers,
    pub client: Client,
    pub booking_code: Option<String>,
    pub comments: Option<String>,
    pub payment_option: PaymentOption,
    pub voucher_number: Option<String>,
    pub display_sign: bool,
    pub driver_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub code: String,
    pub has_atm: bool,
    pub employees: u32,
    pub email: String,
    pub tax_info: String,
    pub city: String,
    pub zip_code: String,
    pub business_type: String,
    pub country: String,
    pub phone: String,
    pub fax: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub name: String,
    pub surname: String,
    pub tax_id: String,
    pub salary: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub driver_id: String,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub duration: u32,
    pub status: RouteStatus,
    pub booking_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub driver_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    pub reference: String,
    pub status: PaymentStatus,
}

// Patches shallow-merge their populated fields over the stored record.
// `id` and `createdAt` are deliberately absent: ids are immutable and a
// booking's creation time never changes.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub booking_type: Option<BookingType>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub departure_time: Option<String>,
    pub room_number: Option<String>,
    pub flight_time: Option<String>,
    pub flight_number: Option<String>,
    pub passengers: Option<Passengers>,
    pub client: Option<Client>,
    pub booking_code: Option<String>,
    pub comments: Option<String>,
    pub payment_option: Option<PaymentOption>,
    pub voucher_number: Option<String>,
    pub display_sign: Option<bool>,
    pub status: Option<BookingStatus>,
    pub driver_id: Option<String>,
}

impl BookingPatch {
    pub(crate) fn apply(self, booking: &mut Booking) {
        if let Some(value) = self.booking_type {
            booking.booking_type = value;
        }
        if let Some(value) = self.origin {
            booking.origin = value;
        }
        if let Some(value) = self.destination {
            booking.destination = value;
        }
        if let Some(value) = self.pickup_date {
            booking.pickup_date = value;
        }
        if let Some(value) = self.departure_time {
            booking.departure_time = value;
        }
        if let Some(value) = self.room_number {
            booking.room_number = Some(value);
        }
        if let Some(value) = self.flight_time {
            booking.flight_time = Some(value);
        }
        if let Some(value) = self.flight_number {
            booking.flight_number = Some(value);
        }
        if let Some(value) = self.passengers {
            booking.passengers = value;
        }
        if let Some(value) = self.client {
            booking.client = value;
        }
        if let Some(value) = self.booking_code {
            booking.booking_code = Some(value);
        }
        if let Some(value) = self.comments {
            booking.comments = Some(value);
        }
        if let Some(value) = self.payment_option {
            booking.payment_option = value;
        }
        if let Some(value) = self.voucher_number {
            booking.voucher_number = Some(value);
        }
        if let Some(value) = self.display_sign {
            booking.display_sign = value;
        }
        if let Some(value) = self.status {
            booking.status = value;
        }
        if let Some(value) = self.driver_id {
            booking.driver_id = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub has_atm: Option<bool>,
    pub employees: Option<u32>,
    pub email: Option<String>,
    pub tax_info: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub business_type: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
}

impl HotelPatch {
    pub(crate) fn apply(self, hotel: &mut Hotel) {
        if let Some(value) = self.name {
            hotel.name = value;
        }
        if let Some(value) = self.code {
            hotel.code = value;
        }
        if let Some(value) = self.has_atm {
            hotel.has_atm = value;
        }
        if let Some(value) = self.employees {
            hotel.employees = value;
        }
        if let Some(value) = self.email {
            hotel.email = value;
        }
        if let Some(value) = self.tax_info {
            hotel.tax_info = value;
        }
        if let Some(value) = self.city {
            hotel.city = value;
        }
        if let Some(value) = self.zip_code {
            hotel.zip_code = value;
        }
        if let Some(value) = self.business_type {
            hotel.business_type = value;
        }
        if let Some(value) = self.country {
            hotel.country = value;
        }
        if let Some(value) = self.phone {
            hotel.phone = value;
        }
        if let Some(value) = self.fax {
            hotel.fax = Some(value);
        }
        if let Some(value) = self.website {
            hotel.website = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub tax_id: Option<String>,
    pub salary: Option<f64>,
    pub routes_completed: Option<u32>,
    pub last_payment: Option<NaiveDate>,
}

impl DriverPatch {
    pub(crate) fn apply(self, driver: &mut Driver) {
        if let Some(value) = self.name {
            driver.name = value;
        }
        if let Some(value) = self.surname {
            driver.surname = value;
        }
        if let Some(value) = self.tax_id {
            driver.tax_id = value;
        }
        if let Some(value) = self.salary {
            driver.salary = value;
        }
        if let Some(value) = self.routes_completed {
            driver.routes_completed = value;
        }
        if let Some(value) = self.last_payment {
            driver.last_payment = Some(value);
        }
    }
}
