//! Metric routes (e.g., /api/v1/metrics/*)

use axum::{routing::get, Router};
use crate::api::controller::host::MetricController;
use crate::app_state::AppState;

pub fn metric_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(MetricController::list_metrics))
        // metric names may contain '/'
        .route("/{host}/{*name}", get(MetricController::get_metric))
}
