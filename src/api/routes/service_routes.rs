//! Service routes (e.g., /api/v1/services/*)

use axum::{routing::get, Router};
use crate::api::controller::host::ServiceController;
use crate::app_state::AppState;

pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ServiceController::list_services))
        .route("/{host}/{*name}", get(ServiceController::get_service))
}
