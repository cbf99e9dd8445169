mod bedrock;
mod mock;
mod types;

pub use bedrock::BedrockInferenceClient;
pub use mock::MockInferenceClient;
pub use types::{CompletionRequest, GenerationParams, PromptTemplate};

use crate::{
    Result,
    config::{InferenceConfig, InferenceProvider},
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// A hosted model endpoint that turns a JSON request body into a JSON response envelope.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, model_id: &str, body: Value) -> Result<Value>;
}

pub fn create_inference_client(
    config: &InferenceConfig,
    sdk_config: &SdkConfig,
) -> Arc<dyn InferenceClient> {
    match config.provider {
        InferenceProvider::Bedrock => {
            info!("Using Bedrock inference with model {}", config.model_id);
            Arc::new(BedrockInferenceClient::new(
                aws_sdk_bedrockruntime::Client::new(sdk_config),
            ))
        }
        InferenceProvider::Mock => {
            info!("Using mock inference client");
            Arc::new(MockInferenceClient::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::{BehaviorVersion, Region};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sdk_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build()
    }

    #[tokio::test]
    async fn test_mock_provider_answers_locally() {
        let config = InferenceConfig {
            provider: InferenceProvider::Mock,
            ..InferenceConfig::default()
        };

        let client = create_inference_client(&config, &sdk_config());
        let envelope = client
            .invoke(&config.model_id, json!({"prompt": "What is 2+2?"}))
            .await
            .unwrap();

        assert_eq!(
            envelope["completion"],
            "[Mocked Bedrock Response] You asked: What is 2+2?"
        );
    }

    #[test]
    fn test_bedrock_provider_builds_client() {
        let client = create_inference_client(&InferenceConfig::default(), &sdk_config());
        assert_eq!(Arc::strong_count(&client), 1);
    }
}
