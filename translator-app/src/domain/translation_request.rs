use super::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_language: Language,
    pub target_language: Language,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(source_language: Language, target_language: Language, text: String) -> Self {
        Self {
            source_language,
            target_language,
            text,
        }
    }
}
