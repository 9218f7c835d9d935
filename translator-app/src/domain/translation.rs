use super::{Language, TranslationRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub source_language: Language,
    pub target_language: Language,
    pub original_text: String,
    pub translated_text: String,
}

impl Translation {
    pub fn new(request: TranslationRequest, translated_text: String) -> Self {
        Self {
            source_language: request.source_language,
            target_language: request.target_language,
            original_text: request.text,
            translated_text,
        }
    }
}
