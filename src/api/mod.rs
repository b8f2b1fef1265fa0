//! HTTP API module for the Personnel Cost Engine.
//!
//! This module exposes the cost calculator and report generator as JSON
//! endpoints. The API holds no state beyond the read-only configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DepartmentCostsRequest, MonthlyCostRequest, ReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
