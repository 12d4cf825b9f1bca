//! Host routes (e.g., /api/v1/hosts/*)

use axum::{routing::get, Router};
use crate::api::controller::host::HostController;
use crate::app_state::AppState;

pub fn host_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(HostController::list_hosts))
        .route("/{name}", get(HostController::get_host))
}
