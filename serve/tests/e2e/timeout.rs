use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serve::response::GenerateDocsResponse;
use soxflow::{CompletionClient, CompletionReply, GenerationError, Message};

use super::common;

/// Backend that answers only after a long delay.
struct SlowCompletion;

#[async_trait]
impl CompletionClient for SlowCompletion {
    async fn invoke(&self, _messages: &[Message]) -> Result<CompletionReply, GenerationError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(CompletionReply::new("Narrative:\nlate\nTest Script:\nlate"))
    }
}

/// **Scenario**: a run exceeding the request bound degrades to the tagged error payload.
#[tokio::test]
async fn e2e_slow_backend_times_out_into_error_payload() {
    common::load_dotenv();
    let (base, _server) =
        common::spawn_server(Arc::new(SlowCompletion), Duration::from_millis(200)).await;

    let body = serde_json::to_value(common::revenue_control()).unwrap();
    let (status, text) = common::post_generate(&base, &body).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let resp: GenerateDocsResponse = serde_json::from_str(&text).unwrap();
    assert!(resp.narrative.is_empty());
    assert!(resp.test_script.starts_with("Error: completion timed out"), "{}", resp.test_script);
    assert!(resp.is_error());
}
