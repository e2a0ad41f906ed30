pub mod schema;

pub use schema::{BackendConfig, Config, LogFormat, ObservabilityConfig};
