//! FuelBud library: application logic for the fuel-efficiency client.

pub mod app;
pub mod config;
pub mod errors;
