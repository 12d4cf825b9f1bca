use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::series::Series;

/// A metric as listed on a host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMetric {
    pub name: String,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// A service as listed on a host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// A host record. Service and metric listings, and single service or metric
/// lookups, come back as hosts carrying only the requested children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub metrics: Vec<HostMetric>,
}

/// Every shape a backend query can answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QueryResult {
    HostList(Vec<Host>),
    Host(Host),
    Timeseries(Series),
    Error(String),
}

impl QueryResult {
    pub fn kind(&self) -> &'static str {
        match self {
            QueryResult::HostList(_) => "host list",
            QueryResult::Host(_) => "host",
            QueryResult::Timeseries(_) => "time-series",
            QueryResult::Error(_) => "error",
        }
    }
}

/// Envelope of a backend answer: log lines emitted while the query ran, then the result.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub log: Vec<String>,
    pub result: QueryResult,
}
