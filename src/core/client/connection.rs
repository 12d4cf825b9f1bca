use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use super::error::FetchError;
use super::result::{QueryResponse, QueryResult};

/// One connection to the telemetry backend's query endpoint.
pub struct BackendConnection {
    client: Client,
    url: String,
}

impl BackendConnection {
    pub fn new(client: Client, base_url: &str) -> Self {
        let trimmed = base_url.trim_end_matches('/');
        let url = if trimmed.ends_with("/query") {
            trimmed.to_string()
        } else {
            format!("{}/query", trimmed)
        };
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends a query and decodes the tagged answer. Backend log lines are
    /// forwarded to our own log and skipped.
    pub async fn query(&self, query: &str) -> Result<QueryResult, FetchError> {
        debug!(url = %self.url, query, "sending backend query");

        let resp = self
            .client
            .post(&self.url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(query, status.as_u16(), body));
        }

        let decoded: QueryResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Protocol(e.to_string()))?;

        for line in &decoded.log {
            info!(target: "backend", "{}", line);
        }
        Ok(decoded.result)
    }
}

fn status_error(query: &str, status: u16, body: String) -> FetchError {
    FetchError::Status {
        query: query.to_string(),
        status,
        body: body.trim().to_string(),
    }
}
