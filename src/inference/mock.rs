use super::InferenceClient;
use crate::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// Answers every request locally without calling a model.
///
/// The reply echoes the prompt in the same envelope shape a text-completion model
/// returns, so the rest of the pipeline is exercised unchanged.
#[derive(Debug, Default)]
pub struct MockInferenceClient;

impl MockInferenceClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke(&self, model_id: &str, body: Value) -> Result<Value> {
        debug!("Mock invocation for model {}", model_id);

        let prompt = body.get("prompt").and_then(Value::as_str).unwrap_or_default();

        Ok(json!({
            "completion": format!("[Mocked Bedrock Response] You asked: {prompt}"),
            "stop_reason": "stop_sequence",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_mock_echoes_prompt() {
        let client = MockInferenceClient::new();
        let reply = client
            .invoke("anthropic.claude-v2", json!({"prompt": "What is 2+2?"}))
            .await
            .unwrap();

        assert_eq!(
            reply["completion"],
            "[Mocked Bedrock Response] You asked: What is 2+2?"
        );
    }

    #[tokio::test]
    async fn test_mock_without_prompt() {
        let client = MockInferenceClient::new();
        let reply = client.invoke("any", json!({})).await.unwrap();

        assert_eq!(reply["completion"], "[Mocked Bedrock Response] You asked: ");
    }
}
