//! ContentCraft web UI.
//!
//! Serves the content settings form and generates content with Gemini on
//! each submission.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run -p contentcraft-web
//! GEMINI_API_KEY=... cargo run -p contentcraft-web -- --port 8080
//! GEMINI_API_KEY=... cargo run -p contentcraft-web -- --model gemini-1.5-pro
//! ```
//!
//! Then open the printed URL in a browser.

use std::net::IpAddr;
use std::sync::Arc;

use clap::Parser;
use contentcraft::prelude::*;
use contentcraft_web::{WebConfig, spawn_web};
use tracing::info;

/// ContentCraft – AI social media agent in the browser.
#[derive(Parser)]
#[command(about = "Browser form for generating social media content with Gemini")]
struct Args {
    /// Model to use (overrides CONTENTCRAFT_MODEL).
    #[arg(long)]
    model: Option<String>,

    /// API base URL (overrides CONTENTCRAFT_API_BASE).
    #[arg(long)]
    api_base: Option<String>,

    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for the web UI server.
    #[arg(long, default_value_t = 8501)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();
    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if let Some(base) = args.api_base {
        config = config.with_api_base_url(base);
    }

    // Without a key the server still starts; each submission reports it.
    let generator = config
        .generator()?
        .map(|client| Arc::new(client) as Arc<dyn TextGenerator>);

    let web_config = WebConfig {
        bind_addr: (args.host, args.port).into(),
    };
    let addr = spawn_web(generator, web_config).await?;
    println!("Web UI: http://{addr}");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to listen for ctrl-c: {e}"))?;
    info!("Shutting down");
    Ok(())
}
