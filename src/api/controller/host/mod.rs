use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::client::result::Host;
use crate::errors::AppError;

pub struct HostController;

impl HostController {
    pub async fn list_hosts(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<Host>>>, AppError> {
        to_json(state.host_service.list_hosts().await)
    }

    pub async fn get_host(
        State(state): State<AppState>,
        Path(name): Path<String>,
    ) -> Result<Json<ApiResponse<Host>>, AppError> {
        to_json(state.host_service.get_host(name).await)
    }
}

pub struct ServiceController;

impl ServiceController {
    pub async fn list_services(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<Host>>>, AppError> {
        to_json(state.host_service.list_services().await)
    }

    pub async fn get_service(
        State(state): State<AppState>,
        Path((host, name)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Host>>, AppError> {
        to_json(state.host_service.get_service(host, name).await)
    }
}

pub struct MetricController;

impl MetricController {
    pub async fn list_metrics(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<Host>>>, AppError> {
        to_json(state.host_service.list_metrics().await)
    }

    pub async fn get_metric(
        State(state): State<AppState>,
        Path((host, name)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Host>>, AppError> {
        to_json(state.host_service.get_metric(host, name).await)
    }
}
