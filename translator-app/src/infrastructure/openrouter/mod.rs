mod client;
mod prompt;
mod types;

pub use client::{parse_completion, Endpoint, OpenRouterClient, DEFAULT_API_URL, DEFAULT_MODEL};
pub use prompt::{build_translation_prompt, SYSTEM_PROMPT};
pub use types::{ChatCompletionRequest, ChatCompletionResponse};
