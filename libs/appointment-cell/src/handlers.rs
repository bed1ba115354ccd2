// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentInput, AppointmentStatus,
    FreeSlots, StatusCounts,
};
use crate::services::SharedAppointmentDirectory;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

/// Raw list filters. Empty values mean "any", as in the console's selects.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentQueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
}

impl AppointmentQueryParams {
    pub fn into_filter(self) -> Result<AppointmentFilter, AppError> {
        let status = match non_empty(self.status) {
            Some(raw) => Some(raw.parse::<AppointmentStatus>().map_err(|e| AppError::BadRequest(e.to_string()))?),
            None => None,
        };
        let date = match non_empty(self.date) {
            Some(raw) => Some(parse_date(&raw)?),
            None => None,
        };

        Ok(AppointmentFilter {
            search_text: self.search,
            status,
            date,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("date '{}' is not YYYY-MM-DD", raw)))
}

#[derive(Debug, Default, Deserialize)]
pub struct FreeSlotsQuery {
    #[serde(default)]
    pub doctor_id: String,
    #[serde(default)]
    pub date: String,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::Validation(msg) => AppError::ValidationError(msg),
            AppointmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::Timeout { .. } => AppError::Timeout(err.to_string()),
        }
    }
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(directory): State<SharedAppointmentDirectory>,
    Query(params): Query<AppointmentQueryParams>,
) -> Result<Json<Value>, AppError> {
    let filter = params.into_filter()?;
    let appointments = directory.query(&filter).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(directory): State<SharedAppointmentDirectory>,
    payload: Result<Json<AppointmentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let Json(input) = payload?;
    let appointment = directory.create(input).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(directory): State<SharedAppointmentDirectory>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    Ok(Json(directory.get(&appointment_id).await?))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(directory): State<SharedAppointmentDirectory>,
    Path(appointment_id): Path<String>,
    payload: Result<Json<AppointmentInput>, JsonRejection>,
) -> Result<Json<Appointment>, AppError> {
    let Json(input) = payload?;
    Ok(Json(directory.update(&appointment_id, input).await?))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(directory): State<SharedAppointmentDirectory>,
    Path(appointment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    directory.delete(&appointment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn get_appointment_stats(
    State(directory): State<SharedAppointmentDirectory>,
) -> Json<StatusCounts> {
    Json(directory.status_counts().await)
}

#[axum::debug_handler]
pub async fn get_free_slots(
    State(directory): State<SharedAppointmentDirectory>,
    Query(query): Query<FreeSlotsQuery>,
) -> Result<Json<FreeSlots>, AppError> {
    let date = parse_date(&query.date)?;
    let slots = directory.free_slots(&query.doctor_id, date).await?;

    Ok(Json(FreeSlots {
        doctor_id: query.doctor_id,
        date,
        slots,
    }))
}
