//! Web layer for the train status service.
//!
//! Provides the train-at-station lookup endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
