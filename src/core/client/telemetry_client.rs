use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, warn};

use super::connection::BackendConnection;
use super::error::FetchError;
use super::pool::ConnectionPool;
use super::query::{
    fetch_host_query, fetch_metric_query, fetch_service_query, list_hosts_query,
    list_metrics_query, list_services_query, timeseries_query,
};
use super::result::{Host, QueryResult};
use super::source::{HostDirectory, MetricSource};
use crate::config::AppConfig;
use crate::domain::series::Series;

/// Pooled client for the telemetry backend.
pub struct TelemetryClient {
    pool: ConnectionPool<BackendConnection>,
    fetch_timeout: Option<Duration>,
}

impl TelemetryClient {
    pub fn connect(config: &AppConfig) -> Result<Self> {
        if config.pool_size == 0 {
            return Err(anyhow!("backend pool size must be at least 1"));
        }

        let connections = (0..config.pool_size)
            .map(|_| {
                let client = Client::builder()
                    .build()
                    .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
                Ok(BackendConnection::new(client, &config.backend_url))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            backend = %config.backend_url,
            size = connections.len(),
            "backend connection pool ready"
        );
        Ok(Self {
            pool: ConnectionPool::new(connections),
            fetch_timeout: config.fetch_timeout,
        })
    }

    pub fn pool(&self) -> &ConnectionPool<BackendConnection> {
        &self.pool
    }

    /// Runs one query on a pooled connection. The connection is held only for
    /// the round-trip and released on every exit path.
    pub async fn query(&self, query: &str) -> Result<QueryResult, FetchError> {
        let conn = self.pool.acquire().await?;
        with_timeout(query, self.fetch_timeout, conn.query(query)).await
    }
}

#[async_trait]
impl MetricSource for TelemetryClient {
    async fn fetch(
        &self,
        hostname: &str,
        identifier: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Series, FetchError> {
        let q = timeseries_query(hostname, identifier, start, end);
        expect_timeseries(self.query(&q).await?)
    }
}

#[async_trait]
impl HostDirectory for TelemetryClient {
    async fn list_hosts(&self) -> Result<Vec<Host>, FetchError> {
        expect_host_list(self.query(&list_hosts_query()).await?)
    }

    async fn list_services(&self) -> Result<Vec<Host>, FetchError> {
        expect_host_list(self.query(&list_services_query()).await?)
    }

    async fn list_metrics(&self) -> Result<Vec<Host>, FetchError> {
        expect_host_list(self.query(&list_metrics_query()).await?)
    }

    async fn fetch_host(&self, name: &str) -> Result<Host, FetchError> {
        expect_host(self.query(&fetch_host_query(name)).await?)
    }

    async fn fetch_service(&self, hostname: &str, name: &str) -> Result<Host, FetchError> {
        expect_host(self.query(&fetch_service_query(hostname, name)).await?)
    }

    async fn fetch_metric(&self, hostname: &str, name: &str) -> Result<Host, FetchError> {
        expect_host(self.query(&fetch_metric_query(hostname, name)).await?)
    }
}

pub(crate) async fn with_timeout<T, F>(
    query: &str,
    timeout: Option<Duration>,
    fut: F,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match timeout {
        None => fut.await,
        Some(limit) => match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(query, ?limit, "backend query timed out");
                Err(FetchError::Timeout {
                    query: query.to_string(),
                    timeout: limit,
                })
            }
        },
    }
}

fn expect_timeseries(result: QueryResult) -> Result<Series, FetchError> {
    match result {
        QueryResult::Timeseries(series) => Ok(series),
        QueryResult::Error(msg) => Err(FetchError::Backend(msg)),
        other => Err(FetchError::NotATimeSeries { found: other.kind() }),
    }
}

fn expect_host_list(result: QueryResult) -> Result<Vec<Host>, FetchError> {
    match result {
        QueryResult::HostList(hosts) => Ok(hosts),
        QueryResult::Error(msg) => Err(FetchError::Backend(msg)),
        other => Err(FetchError::Protocol(format!(
            "expected a host list but got {}",
            other.kind()
        ))),
    }
}

fn expect_host(result: QueryResult) -> Result<Host, FetchError> {
    match result {
        QueryResult::Host(host) => Ok(host),
        QueryResult::Error(msg) => Err(FetchError::Backend(msg)),
        other => Err(FetchError::Protocol(format!(
            "expected a host but got {}",
            other.kind()
        ))),
    }
}
