use axum::{routing::get, Router};

use crate::handlers::*;
use crate::services::SharedPatientRegistry;

pub fn create_patient_router(registry: SharedPatientRegistry) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/stats", get(get_patient_stats))
        .route("/{id}", get(get_patient).put(update_patient).delete(delete_patient))
        .with_state(registry)
}
