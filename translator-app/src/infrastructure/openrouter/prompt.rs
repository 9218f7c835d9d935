use crate::domain::TranslationRequest;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub fn build_translation_prompt(request: &TranslationRequest) -> String {
    format!(
        "Translate the following text from {source} to {target}: {text}",
        source = request.source_language,
        target = request.target_language,
        text = request.text
    )
}
