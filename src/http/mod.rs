//! Read-only JSON API over the simulators

pub mod handler;
pub mod server;

pub use handler::{ApiError, AppState};
pub use server::{router, HttpServer};
