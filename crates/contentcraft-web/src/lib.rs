//! Browser form for the contentcraft generator.
//!
//! `contentcraft-web` is an axum server that serves a single HTML page with
//! the content settings form and a small JSON API behind it. Each click on
//! "Generate" is one `POST /api/generate`, which runs
//! [`generate_content`](contentcraft::generate_content) once and returns the
//! text or a warning/error to show under the form.
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use contentcraft::prelude::*;
//! use contentcraft_web::{WebConfig, spawn_web};
//!
//! let client = AppConfig::from_env().generator()?;
//! let generator = client.map(|c| Arc::new(c) as Arc<dyn TextGenerator>);
//! let addr = spawn_web(generator, WebConfig::default()).await?;
//! println!("Web UI: http://{addr}");
//! ```
//!
//! # Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | The form page |
//! | `GET /api/options` | Dropdown entries, slider bounds, whether a key is configured |
//! | `POST /api/generate` | Run one generation |
//! | `GET /api/health` | Liveness check |

mod api;
mod server;

pub use api::{CountRange, ErrorResponse, GenerateResponse, OptionEntry, OptionsResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use contentcraft::TextGenerator;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:8501`.
    pub bind_addr: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// `generator` is `None` when no API key is configured; the page still
/// loads and every submission reports the missing key.
///
/// The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(
    generator: Option<Arc<dyn TextGenerator>>,
    config: WebConfig,
) -> Result<SocketAddr, String> {
    let router = server::build_router(generator);
    server::start_server(router, config.bind_addr).await
}
