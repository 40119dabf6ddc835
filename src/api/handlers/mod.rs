//! HTTP request handlers.

pub mod agency_handler;

pub use agency_handler::agency_routes;
