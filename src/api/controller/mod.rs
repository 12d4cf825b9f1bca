pub mod graph;
pub mod host;
