use crate::{
    Error, Result,
    config::InferenceConfig,
    inference::{CompletionRequest, GenerationParams, InferenceClient, PromptTemplate},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Answers questions with a single model invocation.
#[derive(Clone)]
pub struct QuestionAnswerer {
    client: Arc<dyn InferenceClient>,
    model_id: String,
    template: PromptTemplate,
    params: GenerationParams,
    completion_field: String,
}

impl QuestionAnswerer {
    pub fn new(client: Arc<dyn InferenceClient>, config: &InferenceConfig) -> Self {
        Self {
            client,
            model_id: config.model_id.clone(),
            template: config.prompt_template,
            params: config.generation.clone(),
            completion_field: config.completion_field.clone(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn build_request(&self, question: &str) -> CompletionRequest {
        CompletionRequest::new(self.template.render(question), &self.params)
    }

    pub async fn ask(&self, question: &str) -> Result<String> {
        let body = serde_json::to_value(self.build_request(question))?;

        debug!("Dispatching question to model {}", self.model_id);

        let envelope = self.client.invoke(&self.model_id, body).await?;
        self.extract_completion(&envelope)
    }

    fn extract_completion(&self, envelope: &Value) -> Result<String> {
        envelope
            .get(&self.completion_field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::inference(format!(
                    "Response envelope has no '{}' text field",
                    self.completion_field
                ))
            })
    }
}
