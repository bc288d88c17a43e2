// Application layer - Use cases over the data sources
pub mod dashboard_service;
pub mod data_source;
pub mod error;
pub mod session_store;
pub mod views;
