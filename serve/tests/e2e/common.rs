//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.
//! Run tests with `--nocapture` to see them.

use std::sync::Arc;
use std::time::Duration;

use soxflow::{CompletionClient, ControlRecord, DocGenerator};
use tokio::net::TcpListener;

/// Loads .env so a developer's RUST_LOG etc. apply. Tests never need OPENAI_API_KEY.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Binds a random port and spawns the server with `backend`. Returns (base_url, handle).
pub async fn spawn_server(
    backend: Arc<dyn CompletionClient>,
    request_timeout: Duration,
) -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(serve::run_serve_on_listener(
        listener,
        DocGenerator::new(backend),
        request_timeout,
        std::future::pending(),
    ));
    (format!("http://{}", addr), handle)
}

pub fn revenue_control() -> ControlRecord {
    ControlRecord {
        control_id: "C-101".into(),
        process_name: "Revenue Recognition".into(),
        control_objective: "Ensure revenue recorded in correct period".into(),
        risk_category: "Financial Reporting".into(),
        frequency: "Monthly".into(),
        control_steps: "Controller reviews cutoff schedule".into(),
        system_used: "SAP".into(),
    }
}

/// POSTs `body` as JSON to `/generate-docs`; returns (status, raw body text).
pub async fn post_generate(base: &str, body: &serde_json::Value) -> (reqwest::StatusCode, String) {
    let resp = reqwest::Client::new()
        .post(format!("{}/generate-docs", base))
        .json(body)
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .unwrap();
    let status = resp.status();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, text)
}
