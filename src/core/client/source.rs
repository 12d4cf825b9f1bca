use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::FetchError;
use super::result::Host;
use crate::domain::series::Series;

/// Where raw time-series come from. Called once per metric per render.
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn fetch(
        &self,
        hostname: &str,
        identifier: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Series, FetchError>;
}

/// Host, service and metric lookups used by the browsing endpoints.
///
/// Listings and single service or metric lookups answer with host records
/// carrying only the requested children.
#[async_trait]
pub trait HostDirectory: Send + Sync {
    async fn list_hosts(&self) -> Result<Vec<Host>, FetchError>;

    async fn list_services(&self) -> Result<Vec<Host>, FetchError>;

    async fn list_metrics(&self) -> Result<Vec<Host>, FetchError>;

    async fn fetch_host(&self, name: &str) -> Result<Host, FetchError>;

    async fn fetch_service(&self, hostname: &str, name: &str) -> Result<Host, FetchError>;

    async fn fetch_metric(&self, hostname: &str, name: &str) -> Result<Host, FetchError>;
}
