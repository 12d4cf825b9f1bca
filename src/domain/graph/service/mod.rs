pub mod graph_service;
pub mod time_window;
