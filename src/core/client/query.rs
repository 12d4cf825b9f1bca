use chrono::{DateTime, Utc};

/// Date format understood by the backend's query language.
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Quotes a string argument for the backend query language.
pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

pub fn format_time(t: DateTime<Utc>) -> String {
    t.format(QUERY_DATETIME_FORMAT).to_string()
}

pub fn timeseries_query(
    hostname: &str,
    identifier: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> String {
    format!(
        "TIMESERIES {}.{} START {} END {}",
        escape_string(hostname),
        escape_string(identifier),
        escape_string(&format_time(start)),
        escape_string(&format_time(end)),
    )
}

pub fn list_hosts_query() -> String {
    "LIST hosts".to_string()
}

pub fn list_services_query() -> String {
    "LIST services".to_string()
}

pub fn list_metrics_query() -> String {
    "LIST metrics".to_string()
}

pub fn fetch_host_query(name: &str) -> String {
    format!("FETCH host {}", escape_string(name))
}

pub fn fetch_service_query(hostname: &str, name: &str) -> String {
    format!("FETCH service {}.{}", escape_string(hostname), escape_string(name))
}

pub fn fetch_metric_query(hostname: &str, name: &str) -> String {
    format!("FETCH metric {}.{}", escape_string(hostname), escape_string(name))
}
