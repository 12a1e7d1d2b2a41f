//! Web layer for the train booking service.
//!
//! Provides HTTP endpoints for adding trains, booking tickets and running
//! the seat and schedule queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
