use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::client::result::Host;
use crate::core::client::source::HostDirectory;

/// Host, service and metric browsing backed by the telemetry backend.
pub struct HostService {
    directory: Arc<dyn HostDirectory>,
}

impl HostService {
    pub fn new(directory: Arc<dyn HostDirectory>) -> Self {
        Self { directory }
    }

    pub async fn list_hosts(&self) -> Result<Vec<Host>> {
        let hosts = self
            .directory
            .list_hosts()
            .await
            .context("Failed to list hosts")?;
        debug!(count = hosts.len(), "listed hosts");
        Ok(hosts)
    }

    pub async fn list_services(&self) -> Result<Vec<Host>> {
        let hosts = self
            .directory
            .list_services()
            .await
            .context("Failed to list services")?;
        debug!(hosts = hosts.len(), "listed services");
        Ok(hosts)
    }

    pub async fn list_metrics(&self) -> Result<Vec<Host>> {
        let hosts = self
            .directory
            .list_metrics()
            .await
            .context("Failed to list metrics")?;
        debug!(hosts = hosts.len(), "listed metrics");
        Ok(hosts)
    }

    pub async fn get_host(&self, name: String) -> Result<Host> {
        self.directory
            .fetch_host(&name)
            .await
            .with_context(|| format!("Failed to fetch host {:?}", name))
    }

    pub async fn get_service(&self, hostname: String, name: String) -> Result<Host> {
        self.directory
            .fetch_service(&hostname, &name)
            .await
            .with_context(|| format!("Failed to fetch service {:?} of host {:?}", name, hostname))
    }

    pub async fn get_metric(&self, hostname: String, name: String) -> Result<Host> {
        self.directory
            .fetch_metric(&hostname, &name)
            .await
            .with_context(|| format!("Failed to fetch metric {:?} of host {:?}", name, hostname))
    }
}
