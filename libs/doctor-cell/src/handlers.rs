use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{Doctor, DoctorError, DoctorRequest, DoctorSearchQuery};
use crate::services::{DoctorRegistry, SharedDoctorRegistry};

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}

fn read(registry: &SharedDoctorRegistry) -> Result<RwLockReadGuard<'_, DoctorRegistry>, AppError> {
    registry
        .read()
        .map_err(|_| AppError::Internal("doctor registry lock poisoned".to_string()))
}

fn write(registry: &SharedDoctorRegistry) -> Result<RwLockWriteGuard<'_, DoctorRegistry>, AppError> {
    registry
        .write()
        .map_err(|_| AppError::Internal("doctor registry lock poisoned".to_string()))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(registry): State<SharedDoctorRegistry>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let roster = read(&registry)?;
    let term = query.search.unwrap_or_default();
    let doctors: Vec<&Doctor> = roster.search(&term).collect();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len(),
        "registered": roster.len()
    })))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(registry): State<SharedDoctorRegistry>,
    payload: Result<Json<DoctorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    let Json(request) = payload?;
    let doctor = write(&registry)?.create(request)?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(registry): State<SharedDoctorRegistry>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = read(&registry)?.get(&doctor_id)?.clone();
    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(registry): State<SharedDoctorRegistry>,
    Path(doctor_id): Path<String>,
    payload: Result<Json<DoctorRequest>, JsonRejection>,
) -> Result<Json<Doctor>, AppError> {
    let Json(request) = payload?;
    let doctor = write(&registry)?.update(&doctor_id, request)?;
    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(registry): State<SharedDoctorRegistry>,
    Path(doctor_id): Path<String>,
) -> Result<StatusCode, AppError> {
    write(&registry)?.delete(&doctor_id)?;
    Ok(StatusCode::NO_CONTENT)
}
