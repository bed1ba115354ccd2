use axum::{
    Router,
    routing::get,
};

use appointment_cell::appointment_routes;
use doctor_cell::doctor_routes;
use patient_cell::create_patient_router;

use crate::state::ClinicState;

pub fn create_router(state: ClinicState) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic console API is running!" }))
        .nest("/doctors", doctor_routes(state.doctors.clone()))
        .nest("/patients", create_patient_router(state.patients.clone()))
        .nest("/appointments", appointment_routes(state.appointments))
}
