use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use super::model::MetricDescriptor;

/// Multi-metric render request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphRequest {
    /// `YYYY-MM-DD HH:MM:SS`, UTC. Defaults to 24 hours before `end_time`.
    pub start_time: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`, UTC. Defaults to now.
    pub end_time: Option<String>,

    #[validate(length(min = 1, message = "at least one metric is required"), nested)]
    pub metrics: Vec<MetricRequest>,

    #[serde(default)]
    pub group_by: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MetricRequest {
    #[validate(length(min = 1, message = "hostname must not be empty"))]
    pub hostname: String,
    #[validate(length(min = 1, message = "identifier must not be empty"))]
    pub identifier: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl From<MetricRequest> for MetricDescriptor {
    fn from(req: MetricRequest) -> Self {
        MetricDescriptor {
            hostname: req.hostname,
            identifier: req.identifier,
            attributes: req.attributes,
        }
    }
}
