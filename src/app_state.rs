use std::sync::Arc;

use crate::core::client::source::{HostDirectory, MetricSource};
use crate::core::client::telemetry_client::TelemetryClient;
use crate::domain::graph::service::graph_service::GraphService;
use crate::domain::host::service::HostService;

#[derive(Clone)]
pub struct AppState {
    pub graph_service: Arc<GraphService>,
    pub host_service: Arc<HostService>,
}

/// Wires both services to the shared, pooled backend client.
pub fn build_app_state(client: Arc<TelemetryClient>) -> AppState {
    let source: Arc<dyn MetricSource> = client.clone();
    let directory: Arc<dyn HostDirectory> = client;
    build_app_state_with(source, directory)
}

pub fn build_app_state_with(
    source: Arc<dyn MetricSource>,
    directory: Arc<dyn HostDirectory>,
) -> AppState {
    AppState {
        graph_service: Arc::new(GraphService::new(source)),
        host_service: Arc::new(HostService::new(directory)),
    }
}
