// Twitch MCP server
//
// Serves the Twitch tools over stdio. Credentials and endpoints come from
// TWITCH_* environment variables; logs go to stderr so stdout stays free for
// the protocol.

use anyhow::Result;
use env_logger::Env;
use log::{error, info};
use rmcp::{ServiceExt, transport::stdio};
use twitch_mcp::{TwitchConfig, TwitchMcp};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let client = TwitchConfig::from_env()?.build_client()?;
    info!("Starting Twitch MCP server on stdio");

    let service = TwitchMcp::new(client)
        .serve(stdio())
        .await
        .inspect_err(|e| error!("Failed to start MCP server: {e}"))?;

    service.waiting().await?;
    Ok(())
}
