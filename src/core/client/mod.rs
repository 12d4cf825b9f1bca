pub mod connection;
pub mod error;
pub mod pool;
pub mod query;
pub mod result;
pub mod source;
pub mod telemetry_client;
