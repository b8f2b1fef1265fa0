//! HTTP request handlers for the Personnel Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler parses its body, calls the synchronous core, and returns JSON.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::reporting::ReportGenerator;

use super::request::{DepartmentCostsRequest, MonthlyCostRequest, ReportRequest};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/costs/monthly", post(monthly_cost_handler))
        .route("/costs/department", post(department_costs_handler))
        .route("/reports/department", post(department_report_handler))
        .route("/reports/metrics", post(key_metrics_handler))
        .route("/reports/trend", post(trend_report_handler))
        .with_state(state)
}

/// Unwraps a parsed body or turns the rejection into a `400` response.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let response = ApiErrorResponse::from(&rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %response.error.code,
                error = %response.error.message,
                "Request body rejected"
            );
            Err(response.into_response())
        }
    }
}

fn ok_json<T: Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

/// Handler for POST /costs/monthly.
async fn monthly_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly cost request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let cost =
        state
            .calculator()
            .compute_monthly_cost(&request.employee, &request.period, request.extras());

    info!(
        correlation_id = %correlation_id,
        employee_id = %cost.employee_id,
        period = %cost.period,
        total_cost = %cost.total_cost(),
        duration_us = start_time.elapsed().as_micros(),
        "Monthly cost computed"
    );
    ok_json(cost)
}

/// Handler for POST /costs/department.
async fn department_costs_handler(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentCostsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department costs request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let costs = state.calculator().compute_department_costs(
        &request.employees,
        &request.department,
        &request.period,
    );

    info!(
        correlation_id = %correlation_id,
        department = %request.department,
        period = %request.period,
        records = costs.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Department costs computed"
    );
    ok_json(costs)
}

/// Handler for POST /reports/department.
async fn department_report_handler(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department report request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let table = ReportGenerator.report_by_department(&request.employees, &request.costs);

    info!(
        correlation_id = %correlation_id,
        departments = table.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Department report generated"
    );
    ok_json(table)
}

/// Handler for POST /reports/metrics.
async fn key_metrics_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing key metrics request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let metrics = ReportGenerator.key_metrics(&request.employees, &request.costs);

    info!(
        correlation_id = %correlation_id,
        total_employees = metrics.total_employees,
        total_cost = %metrics.total_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Key metrics generated"
    );
    ok_json(metrics)
}

/// Handler for POST /reports/trend.
async fn trend_report_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trend report request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let table = ReportGenerator.trend_report(&request.costs);

    info!(
        correlation_id = %correlation_id,
        periods = table.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Trend report generated"
    );
    ok_json(table)
}
