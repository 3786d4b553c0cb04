use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Install the global tracing subscriber, `RUST_LOG` overrides the default `info` level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

/// Configure session management backed by an in-memory store
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;

    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Bind the TCP listener on the configured host & port
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;

    Ok(listener)
}
