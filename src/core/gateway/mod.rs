pub mod client;
pub mod envelope;
pub mod http_client;
pub mod options;
pub mod scrub;

pub use client::{BackendGateway, DEFAULT_BASE_URL};
pub use envelope::AgentReply;
pub use http_client::{build_gateway_client, build_gateway_client_with_timeout};
pub use options::RequestOptions;
pub use scrub::{sanitize_detail, scrub_secret_patterns};
