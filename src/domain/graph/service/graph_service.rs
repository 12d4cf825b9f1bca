use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;
use validator::Validate;

use super::time_window::resolve_window;
use crate::core::client::source::MetricSource;
use crate::core::render::json::RenderedPlot;
use crate::core::render::{JsonRenderer, Renderer};
use crate::domain::graph::dto::GraphRequest;
use crate::domain::graph::error::GraphError;
use crate::domain::graph::model::{Graph, MetricDescriptor};
use crate::domain::graph::plot::plot;

pub struct GraphService {
    source: Arc<dyn MetricSource>,
    renderer: JsonRenderer,
}

impl GraphService {
    pub fn new(source: Arc<dyn MetricSource>) -> Self {
        Self {
            source,
            renderer: JsonRenderer::default(),
        }
    }

    /// Graph of a single metric over the requested (or default) window.
    pub async fn render_metric(
        &self,
        hostname: String,
        identifier: String,
        start_time: Option<String>,
        end_time: Option<String>,
    ) -> Result<RenderedPlot> {
        let (start, end) = resolve_window(start_time.as_deref(), end_time.as_deref(), Utc::now())?;
        let graph = Graph::new(
            start,
            end,
            vec![MetricDescriptor::new(hostname, identifier)],
            vec![],
        )?;
        self.render(graph).await
    }

    pub async fn render_graph(&self, request: GraphRequest) -> Result<RenderedPlot> {
        request
            .validate()
            .map_err(|e| GraphError::InvalidRequest(e.to_string()))?;

        let (start, end) = resolve_window(
            request.start_time.as_deref(),
            request.end_time.as_deref(),
            Utc::now(),
        )?;
        let metrics = request
            .metrics
            .into_iter()
            .map(MetricDescriptor::from)
            .collect();
        let graph = Graph::new(start, end, metrics, request.group_by)?;
        self.render(graph).await
    }

    async fn render(&self, graph: Graph) -> Result<RenderedPlot> {
        let span = info_span!("render", request_id = %Uuid::new_v4());
        async {
            info!(
                start = %graph.start(),
                end = %graph.end(),
                metrics = graph.metrics().len(),
                group_by = ?graph.group_by(),
                "rendering graph"
            );
            let data = plot(&graph, self.source.as_ref()).await?;
            Ok::<_, anyhow::Error>(self.renderer.render(&data))
        }
        .instrument(span)
        .await
    }
}
