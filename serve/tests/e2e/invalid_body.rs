//! Rejected bodies never reach the backend.

use std::sync::Arc;
use std::time::Duration;

use serve::response::ErrorResponse;
use soxflow::MockCompletion;

use super::common;

#[tokio::test]
async fn e2e_blank_field_returns_422() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply("Narrative:\nN\nTest Script:\nT"));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let mut record = common::revenue_control();
    record.control_steps = "   ".into();
    let (status, text) = common::post_generate(&base, &serde_json::to_value(record).unwrap()).await;

    assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(body.error, "control_steps must not be empty");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn e2e_missing_field_returns_422() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply("Narrative:\nN\nTest Script:\nT"));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let mut body = serde_json::to_value(common::revenue_control()).unwrap();
    body.as_object_mut().unwrap().remove("system_used");
    let (status, text) = common::post_generate(&base, &body).await;

    assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert!(body.error.contains("system_used"), "{}", body.error);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn e2e_invalid_json_returns_400() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply("Narrative:\nN\nTest Script:\nT"));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/generate-docs", base))
        .header("content-type", "application/json")
        .body("not valid json")
        .send()
        .await
        .unwrap();
    let status = resp.status();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert!(!body.error.is_empty());
    assert_eq!(mock.call_count(), 0);
}
