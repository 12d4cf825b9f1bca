//! Graph routes (e.g., /api/v1/graphs/*)

use axum::{routing::{get, post}, Router};
use crate::api::controller::graph::GraphController;
use crate::app_state::AppState;

pub fn graph_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(GraphController::post_graph))
        // identifiers may contain '/'
        .route("/{host}/{*identifier}", get(GraphController::get_metric_graph))
}
