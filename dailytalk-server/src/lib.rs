//! dailytalk-server - HTTP server for the DailyTalk activity provider
//!
//! This crate owns the activity registry and exposes it over the provider
//! endpoints a learning platform calls: deploy, submit, configuration
//! metadata, and analytics. All scoring logic lives in `dailytalk-core`;
//! the handlers here are thin adapters between HTTP and the core service.

mod error;
pub mod http;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// The main dailytalk server
pub struct DailyTalkServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl DailyTalkServer {
    /// Create a new server with a fresh registry
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new().with_public_url(config.public_url.clone()));
        Self { config, state }
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("dailytalk server listening on {}", addr);
        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener (used by tests)
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        let router = create_router(self.state);
        axum::serve(listener, router.into_make_service())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Externally visible base URL for launch URLs, if the server sits
    /// behind a proxy; otherwise the request Host header is used
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7780,
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            public_url: None,
        }
    }

    /// Set the externally visible base URL
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }

    /// Returns the socket address string (e.g., "127.0.0.1:7780")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
