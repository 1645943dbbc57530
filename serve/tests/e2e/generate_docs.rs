use std::sync::Arc;
use std::time::Duration;

use serve::response::GenerateDocsResponse;
use soxflow::MockCompletion;

use super::common;

/// **Scenario**: C-101 revenue control with a mocked reply returns both sections, no error tag.
#[tokio::test]
async fn e2e_generate_docs_returns_sections() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply(
        "Narrative:\nRevenue is recognized monthly...\nTest Script:\n1. Select sample...\n2. Verify cutoff...",
    ));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let body = serde_json::to_value(common::revenue_control()).unwrap();
    let (status, text) = common::post_generate(&base, &body).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(!text.contains("\"error\""), "unexpected error tag: {}", text);
    let resp: GenerateDocsResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(resp.narrative, "Revenue is recognized monthly...");
    assert_eq!(resp.test_script, "1. Select sample...\n2. Verify cutoff...");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn e2e_unparseable_reply_returns_empty_sections() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply("Here is some prose with no labels."));
    let (base, _server) = common::spawn_server(mock, Duration::from_secs(5)).await;

    let body = serde_json::to_value(common::revenue_control()).unwrap();
    let (status, text) = common::post_generate(&base, &body).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let resp: GenerateDocsResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(resp.narrative, "");
    assert_eq!(resp.test_script, "");
    assert!(!resp.is_error());
}

/// **Scenario**: backend failure answers 200 with empty narrative, prefixed message and error tag.
#[tokio::test]
async fn e2e_backend_failure_returns_tagged_error_payload() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_backend_error(
        "OpenAI API error: Incorrect API key provided",
    ));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let body = serde_json::to_value(common::revenue_control()).unwrap();
    let (status, text) = common::post_generate(&base, &body).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let resp: GenerateDocsResponse = serde_json::from_str(&text).unwrap();
    assert!(resp.narrative.is_empty());
    assert!(resp.test_script.starts_with("Error: "), "{}", resp.test_script);
    assert!(resp.test_script.contains("Incorrect API key provided"));
    assert!(resp
        .error
        .as_deref()
        .is_some_and(|e| e.contains("Incorrect API key provided")));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn e2e_concurrent_requests_are_independent() {
    common::load_dotenv();
    let mock = Arc::new(MockCompletion::with_reply("Narrative:\nN\nTest Script:\nT"));
    let (base, _server) = common::spawn_server(mock.clone(), Duration::from_secs(5)).await;

    let mut handles = Vec::new();
    for i in 0..5 {
        let base = base.clone();
        let mut record = common::revenue_control();
        record.control_id = format!("C-{}", i);
        handles.push(tokio::spawn(async move {
            let body = serde_json::to_value(record).unwrap();
            common::post_generate(&base, &body).await
        }));
    }
    for handle in handles {
        let (status, text) = handle.await.unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
        let resp: GenerateDocsResponse = serde_json::from_str(&text).unwrap();
        assert_eq!((resp.narrative.as_str(), resp.test_script.as_str()), ("N", "T"));
    }
    assert_eq!(mock.call_count(), 5);
}
