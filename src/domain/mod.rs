pub mod graph;
pub mod host;
pub mod series;
