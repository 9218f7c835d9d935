use crate::domain::{Translation, TranslationRequest};
use crate::infrastructure::config::TranslatorConfig;
use crate::infrastructure::openrouter::OpenRouterClient;
use crate::infrastructure::security::InputSanitizer;
use translator_errors::TranslationError;

pub struct TranslateText {
    client: OpenRouterClient,
}

impl TranslateText {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            client: OpenRouterClient::new(config.endpoint, config.api_key),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    pub async fn execute(&self, request: TranslationRequest) -> Result<Translation, TranslationError> {
        let text = InputSanitizer::validate_text(&request.text)?;
        let request = TranslationRequest { text, ..request };

        tracing::debug!(
            from = %request.source_language,
            to = %request.target_language,
            chars = request.text.chars().count(),
            "Translating"
        );

        let translated = self.client.translate(&request).await.map_err(|e| {
            tracing::debug!("Translation failed: {}", e);
            e
        })?;

        Ok(Translation::new(request, translated))
    }
}
