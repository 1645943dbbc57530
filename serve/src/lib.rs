//! HTTP server for SOXFlow (axum).
//!
//! Exposes `POST /generate-docs` over a [`DocGenerator`] built by the caller, plus
//! `GET /health`. Listens on `127.0.0.1:8000` unless configured otherwise.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`ServeConfig`], response bodies
//! in [`response`].

mod app;
pub mod response;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use soxflow::DocGenerator;
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState, SERVICE_NAME};

pub use app::ServeConfig;

/// Serves on an existing listener until `shutdown` resolves. Used by tests (bind to
/// 127.0.0.1:0 then pass the listener) and by [`run_serve`].
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    generator: DocGenerator,
    request_timeout: Duration,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        request_timeout_secs = request_timeout.as_secs(),
        "{} listening on http://{}", SERVICE_NAME, addr
    );

    let state = Arc::new(AppState {
        generator,
        request_timeout,
    });
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Binds `config.addr` and serves until Ctrl-C.
pub async fn run_serve(
    config: ServeConfig,
    generator: DocGenerator,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(&config.addr).await?;
    run_serve_on_listener(listener, generator, config.request_timeout, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, shutting down");
        }
    })
    .await
}
