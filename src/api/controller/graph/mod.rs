//! Graph controller: connects routes to graph rendering usecases

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::graph_dto::GraphTimeQuery;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::render::json::RenderedPlot;
use crate::domain::graph::dto::GraphRequest;
use crate::errors::AppError;

pub struct GraphController;

impl GraphController {
    pub async fn get_metric_graph(
        State(state): State<AppState>,
        Path((host, identifier)): Path<(String, String)>,
        Query(query): Query<GraphTimeQuery>,
    ) -> Result<Json<ApiResponse<RenderedPlot>>, AppError> {
        to_json(
            state
                .graph_service
                .render_metric(host, identifier, query.start_time, query.end_time)
                .await,
        )
    }

    pub async fn post_graph(
        State(state): State<AppState>,
        Json(payload): Json<GraphRequest>,
    ) -> Result<Json<ApiResponse<RenderedPlot>>, AppError> {
        to_json(state.graph_service.render_graph(payload).await)
    }
}
