use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{AgeBreakdown, Patient, PatientError, PatientRequest, PatientSearchQuery};
use crate::services::{PatientRegistry, SharedPatientRegistry};

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
            PatientError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}

fn read(registry: &SharedPatientRegistry) -> Result<RwLockReadGuard<'_, PatientRegistry>, AppError> {
    registry
        .read()
        .map_err(|_| AppError::Internal("patient registry lock poisoned".to_string()))
}

fn write(registry: &SharedPatientRegistry) -> Result<RwLockWriteGuard<'_, PatientRegistry>, AppError> {
    registry
        .write()
        .map_err(|_| AppError::Internal("patient registry lock poisoned".to_string()))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(registry): State<SharedPatientRegistry>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let patients_guard = read(&registry)?;
    let term = query.search.unwrap_or_default();
    let patients: Vec<&Patient> = patients_guard.search(&term).collect();

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn get_patient_stats(
    State(registry): State<SharedPatientRegistry>,
) -> Result<Json<AgeBreakdown>, AppError> {
    let patients = read(&registry)?;
    Ok(Json(patients.age_breakdown(patients.today())))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(registry): State<SharedPatientRegistry>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let Json(request) = payload?;
    let patient = write(&registry)?.create(request)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(registry): State<SharedPatientRegistry>,
    Path(patient_id): Path<String>,
) -> Result<Json<Patient>, AppError> {
    let patient = read(&registry)?.get(&patient_id)?.clone();
    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(registry): State<SharedPatientRegistry>,
    Path(patient_id): Path<String>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<Json<Patient>, AppError> {
    let Json(request) = payload?;
    let patient = write(&registry)?.update(&patient_id, request)?;
    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(registry): State<SharedPatientRegistry>,
    Path(patient_id): Path<String>,
) -> Result<StatusCode, AppError> {
    write(&registry)?.delete(&patient_id)?;
    Ok(StatusCode::NO_CONTENT)
}
