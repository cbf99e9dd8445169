#![allow(dead_code)]

use axum::Router;
use doc_assistant::{
    assistant::{QuestionAnswerer, Uploader},
    config::Config,
    inference::InferenceClient,
    server::{AppState, router},
    storage::ObjectStore,
};
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config::default()
}

/// Build the full application router around the given collaborators
pub fn create_test_app(store: Arc<dyn ObjectStore>, client: Arc<dyn InferenceClient>) -> Router {
    let config = create_test_config();
    let state = AppState {
        uploader: Uploader::new(store),
        answerer: QuestionAnswerer::new(client, &config.inference),
    };

    router(state, &config.server.cors).expect("default CORS config is valid")
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
  cors:
    allowed_origins:
      - "http://localhost:3000"

aws:
  region: "eu-central-1"
  endpoint_url: "http://localhost:4566"

storage:
  backend: "memory"
  bucket: "test-bucket"
  force_path_style: true

inference:
  provider: "mock"
  model_id: "anthropic.claude-instant-v1"
  prompt_template: "human_assistant"
  completion_field: "completion"
  generation:
    max_tokens: 128
    temperature: 0.2
    top_k: 50
    top_p: 0.9
    stop_sequences: []
"#;
