//! Graph requests: grouping fetched series and flattening them into plot lines.

pub mod dto;
pub mod error;
pub mod group;
pub mod model;
pub mod plot;
pub mod service;

pub use error::GraphError;
pub use model::{Graph, GroupKey, LabeledSeries, MetricDescriptor};
