//! HTTP adapter exposing the pricing operations as a REST API.

pub mod controller;
pub mod request;
pub mod response;

pub use controller::{ApiError, AppState, create_router};
