use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::GraphError;
use crate::domain::series::Series;

/// Identifies one raw time-series at the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub hostname: String,
    pub identifier: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl MetricDescriptor {
    pub fn new(hostname: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            identifier: identifier.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// One attribute value per group-by name; unset attributes are empty strings.
///
/// Ordering is lexicographic over the tuple, which matches ordering the
/// values joined by a separator that sorts below any character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn for_metric(metric: &MetricDescriptor, group_by: &[String]) -> Self {
        GroupKey(
            group_by
                .iter()
                .map(|attr| metric.attributes.get(attr).cloned().unwrap_or_default())
                .collect(),
        )
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Human-readable form used as the group's identifier.
    pub fn label(&self) -> String {
        self.0.join("-")
    }
}

/// A render request. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    metrics: Vec<MetricDescriptor>,
    group_by: Vec<String>,
}

impl Graph {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        metrics: Vec<MetricDescriptor>,
        group_by: Vec<String>,
    ) -> Result<Self, GraphError> {
        if end < start {
            return Err(GraphError::InvalidRequest(format!(
                "start time {} is after end time {}",
                start, end
            )));
        }
        if metrics.is_empty() {
            return Err(GraphError::InvalidRequest("Missing host/metric information".into()));
        }
        if let Some(m) = metrics
            .iter()
            .find(|m| m.hostname.is_empty() || m.identifier.is_empty())
        {
            return Err(GraphError::InvalidRequest(format!(
                "Missing host/metric information in {:?}.{:?}",
                m.hostname, m.identifier
            )));
        }
        if group_by.iter().any(String::is_empty) {
            return Err(GraphError::InvalidRequest("empty group-by attribute name".into()));
        }

        Ok(Self {
            start,
            end,
            metrics,
            group_by,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn metrics(&self) -> &[MetricDescriptor] {
        &self.metrics
    }

    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }
}

/// A series ready to plot, with the host/identifier pair used for its legend.
///
/// An empty `hostname` marks a group spanning more than one host.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    pub hostname: String,
    pub identifier: String,
    pub series: Series,
}
