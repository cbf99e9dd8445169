#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Bytes;
use doc_assistant::{Error, Result, inference::InferenceClient, storage::ObjectStore};
use mockall::mock;
use serde_json::Value;
use std::sync::{Arc, Mutex};

mock! {
    pub ObjectStore {}

    #[async_trait]
    impl ObjectStore for ObjectStore {
        async fn put_object(&self, key: &str, data: Bytes) -> Result<()>;
    }
}

/// A model invocation captured by [`StubInferenceClient`].
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    pub model_id: String,
    pub body: Value,
}

/// Inference collaborator returning canned envelopes and recording every call.
#[derive(Debug, Clone)]
pub struct StubInferenceClient {
    pub envelope: Value,
    pub invocations: Arc<Mutex<Vec<RecordedInvocation>>>,
    pub error: Option<String>,
}

impl StubInferenceClient {
    pub fn with_envelope(envelope: Value) -> Self {
        Self {
            envelope,
            invocations: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_completion(completion: &str) -> Self {
        Self::with_envelope(serde_json::json!({
            "completion": completion,
            "stop_reason": "stop_sequence",
        }))
    }

    pub fn with_error(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::with_envelope(Value::Null)
        }
    }

    pub fn get_invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for StubInferenceClient {
    async fn invoke(&self, model_id: &str, body: Value) -> Result<Value> {
        self.invocations.lock().unwrap().push(RecordedInvocation {
            model_id: model_id.to_string(),
            body,
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.envelope.clone())
    }
}
