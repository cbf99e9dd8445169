use super::InferenceClient;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use serde_json::Value;
use tracing::debug;

/// Bedrock Runtime `InvokeModel` client.
pub struct BedrockInferenceClient {
    client: Client,
}

impl BedrockInferenceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InferenceClient for BedrockInferenceClient {
    async fn invoke(&self, model_id: &str, body: Value) -> Result<Value> {
        let payload = serde_json::to_vec(&body)?;

        debug!(
            "Invoking model {} with {} byte request body",
            model_id,
            payload.len()
        );

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                Error::inference(format!(
                    "Bedrock invoke failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let envelope: Value = serde_json::from_slice(output.body().as_ref())?;

        debug!("Received response envelope from model {}", model_id);

        Ok(envelope)
    }
}
