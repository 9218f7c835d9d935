use crate::application::TranslateText;
use crate::infrastructure::config::{
    ConfigError, EnvCredentials, FileCredentials, TranslatorConfig, CREDENTIALS_FILE_VAR,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub translate_text: Arc<TranslateText>,
}

impl AppContext {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            translate_text: Arc::new(TranslateText::new(config)),
        }
    }

    /// Builds the context from the process environment. The API key is read
    /// from `TRANSLATOR_CREDENTIALS_FILE` when set, otherwise from
    /// `OPENROUTER_API_KEY`. A missing key is not an error here.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |name: &str| std::env::var(name).ok();

        let config = match std::env::var(CREDENTIALS_FILE_VAR) {
            Ok(path) => {
                tracing::info!("Reading API key from {}", path);
                TranslatorConfig::load(&FileCredentials::new(path), lookup)?
            }
            Err(_) => TranslatorConfig::load(&EnvCredentials::default(), lookup)?,
        };

        if config.api_key.is_none() {
            tracing::warn!("No API key configured; translations will report a missing credential");
        }
        tracing::info!(
            "Using chat completion endpoint {} with model {}",
            config.endpoint.url,
            config.endpoint.model
        );

        Ok(Self::new(config))
    }
}
