pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod observability;
pub mod storage;
pub mod store;
pub mod views;
