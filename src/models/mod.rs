pub mod booking;
pub mod driver;
pub mod hotel;
pub mod notification;
pub mod payment;
pub mod route;
