//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payroll, calculate_salary_for_month};
use crate::models::{AttendanceRecord, Employee};

use super::request::{PayrollRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for POST /salary.
///
/// Calculates one employee's salary for the requested month.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee: Employee = request.employee.into();
    let records: Vec<AttendanceRecord> = request.attendance.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let outcome = state.resolve_period(request.year, request.month).and_then(
        |(pay_month, settings)| calculate_salary_for_month(&employee, &records, pay_month, &settings),
    );

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                records_count = records.len(),
                total_payable = %result.total_payable,
                duration_us = start_time.elapsed().as_micros(),
                "Salary calculated successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary calculation failed");
            error_response(correlation_id, err.into())
        }
    }
}

/// Handler for POST /payroll.
///
/// Calculates every eligible employee on the roster for the requested month.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (year, month) = (request.year, request.month);
    let settings = match state.resolve_period(year, month) {
        Ok((_, settings)) => settings,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll period rejected");
            return error_response(correlation_id, err.into());
        }
    };

    let roster: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let records: Vec<AttendanceRecord> = request.attendance.into_iter().map(Into::into).collect();

    // The rayon fan-out must not run on an async worker thread.
    let start_time = Instant::now();
    let joined = tokio::task::spawn_blocking(move || {
        calculate_payroll(&roster, &records, year, month, &settings)
    })
    .await;

    match joined {
        Ok(Ok(report)) => {
            info!(
                correlation_id = %correlation_id,
                employees = report.totals.employees,
                skipped = report.skipped.len(),
                total_payable = %report.totals.total_payable,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Ok(Err(err)) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll calculation failed");
            error_response(correlation_id, err.into())
        }
        Err(join_error) => {
            error!(correlation_id = %correlation_id, error = %join_error, "Payroll task failed");
            error_response(
                correlation_id,
                ApiErrorResponse::internal(ApiError::new(
                    "CALCULATION_ERROR",
                    "Payroll calculation did not complete",
                )),
            )
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, mut api_error: ApiErrorResponse) -> Response {
    api_error.error = api_error.error.for_request(correlation_id);
    api_error.into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(correlation_id, ApiErrorResponse::bad_request(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{PayrollReport, SalaryCalculationResult};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
        AppState::new(config)
    }

    fn post(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn salary_body(salary: &str) -> String {
        serde_json::json!({
            "year": 2024,
            "month": 3,
            "employee": {
                "id": "emp_001",
                "name": "Ayse",
                "surname": "Yilmaz",
                "monthly_salary": salary
            },
            "attendance": [
                {
                    "employee_id": "emp_001",
                    "date": "2024-03-04",
                    "status": "present_full_day",
                    "worked_minutes_regular": 600
                }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_salary_returns_breakdown() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/salary", salary_body("30000")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SalaryCalculationResult = serde_json::from_slice(&body).unwrap();

        // 2h * (30000 / 176) * 1.5 = 511.36
        assert_eq!(
            result.overtime_details.weekday_pay,
            Decimal::from_str("511.36").unwrap()
        );
        assert_eq!(result.total_payable, Decimal::from_str("30511.36").unwrap());
    }

    #[tokio::test]
    async fn test_salary_zero_salary_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/salary", salary_body("0")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.details.as_deref(), Some("monthly_salary"));
        assert!(error.correlation_id.is_some());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post("/salary", "{ not json".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_payroll_returns_report() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "year": 2024,
            "month": 3,
            "employees": [
                {"id": "emp_001", "name": "Ayse", "surname": "Yilmaz", "monthly_salary": "30000"},
                {"id": "emp_002", "name": "Mehmet", "surname": "Demir"}
            ]
        })
        .to_string();

        let response = router.oneshot(post("/payroll", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: PayrollReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.totals.total_payable, Decimal::from(30000));
    }
}
