use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::SharedDoctorRegistry;

pub fn doctor_routes(registry: SharedDoctorRegistry) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor)
                .put(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        .with_state(registry)
}
