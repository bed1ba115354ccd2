// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::SharedAppointmentDirectory;

pub fn appointment_routes(directory: SharedAppointmentDirectory) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/stats", get(handlers::get_appointment_stats))
        .route("/slots", get(handlers::get_free_slots))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .with_state(directory)
}
