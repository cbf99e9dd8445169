use serde::{Deserialize, Serialize};

/// How a user question is turned into the prompt sent to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    /// The question is sent verbatim.
    #[default]
    Raw,
    /// Anthropic text-completion turn format.
    HumanAssistant,
}

impl PromptTemplate {
    pub fn render(&self, question: &str) -> String {
        match self {
            Self::Raw => question.to_string(),
            Self::HumanAssistant => format!("\n\nHuman: {question}\n\nAssistant:"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_stop_sequences")]
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            stop_sequences: default_stop_sequences(),
        }
    }
}

fn default_max_tokens() -> u32 {
    256
}

fn default_temperature() -> f32 {
    0.5
}

fn default_top_k() -> u32 {
    250
}

fn default_top_p() -> f32 {
    1.0
}

fn default_stop_sequences() -> Vec<String> {
    vec!["\n\nHuman:".to_string()]
}

/// Request body of a text-completion `InvokeModel` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens_to_sample: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl CompletionRequest {
    pub fn new(prompt: String, params: &GenerationParams) -> Self {
        Self {
            prompt,
            max_tokens_to_sample: params.max_tokens,
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            stop_sequences: params.stop_sequences.clone(),
        }
    }
}
