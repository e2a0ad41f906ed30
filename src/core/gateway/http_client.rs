use reqwest::Client;
use std::time::Duration;

/// Client with no request timeout; calls wait until the transport resolves.
pub fn build_gateway_client() -> Client {
    build_gateway_client_with_timeout(None)
}

pub fn build_gateway_client_with_timeout(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder()
        .user_agent(concat!("asca/", env!("CARGO_PKG_VERSION")))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().unwrap_or_else(|_| Client::new())
}
