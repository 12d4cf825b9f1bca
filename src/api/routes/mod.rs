//! API route declarations (e.g., /api/v1/*)

pub mod graph_routes;
pub mod host_routes;
pub mod metric_routes;
pub mod service_routes;
