//! Serve command for running the activity provider
//!
//! Runs the HTTP server a learning platform talks to: deploy, submit,
//! configuration metadata, and analytics endpoints.

use anyhow::Result;
use clap::Args;
use tracing::info;

use dailytalk_server::{DailyTalkServer, ServerConfig};

/// Default port for the dailytalk server
pub const DEFAULT_PORT: u16 = 7780;
/// Default host for the dailytalk server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Externally visible base URL for launch URLs (behind a proxy)
    #[arg(long)]
    pub public_url: Option<String>,
}

/// Run the serve command in the foreground
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::new(args.host, args.port);
    if let Some(public_url) = args.public_url {
        config = config.with_public_url(public_url);
    }

    info!("starting dailytalk server on {}", config.addr());
    DailyTalkServer::new(config).run().await?;
    Ok(())
}
