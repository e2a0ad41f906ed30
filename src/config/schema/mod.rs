mod backend;
mod core;
mod observability;

pub use backend::BackendConfig;
pub use self::core::Config;
pub use observability::{LogFormat, ObservabilityConfig};
