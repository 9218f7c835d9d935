use super::CredentialSource;
use crate::infrastructure::openrouter::Endpoint;

pub const API_URL_VAR: &str = "TRANSLATOR_API_URL";
pub const MODEL_VAR: &str = "TRANSLATOR_MODEL";
pub const CREDENTIALS_FILE_VAR: &str = "TRANSLATOR_CREDENTIALS_FILE";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read credentials from {path}: {reason}")]
    CredentialFile { path: String, reason: String },
}

/// Resolved settings handed to the translation client.
#[derive(Debug, Clone, Default)]
pub struct TranslatorConfig {
    pub endpoint: Endpoint,
    pub api_key: Option<String>,
}

impl TranslatorConfig {
    /// Resolves the endpoint from `lookup` (usually the process environment)
    /// and the key from `credentials`.
    pub fn load<F>(credentials: &dyn CredentialSource, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut endpoint = Endpoint::default();

        if let Some(raw) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            endpoint.url = validate_api_url(raw.trim())?;
        }

        if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
            endpoint.model = model.trim().to_string();
        }

        Ok(Self {
            endpoint,
            api_key: credentials.api_key()?,
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        var: API_URL_VAR,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let parsed = url::Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(invalid("only http and https are supported"));
    }

    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::openrouter::{DEFAULT_API_URL, DEFAULT_MODEL};
    use std::collections::HashMap;

    struct FixedKey(Option<&'static str>);

    impl CredentialSource for FixedKey {
        fn api_key(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.0.map(str::to_string))
        }
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::load(&FixedKey(None), lookup(&[])).unwrap();
        assert_eq!(config.endpoint.url, DEFAULT_API_URL);
        assert_eq!(config.endpoint.model, DEFAULT_MODEL);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = TranslatorConfig::load(
            &FixedKey(Some("sk-test")),
            lookup(&[
                (API_URL_VAR, "http://127.0.0.1:8080/v1/chat/completions"),
                (MODEL_VAR, "mistralai/mistral-7b-instruct"),
            ]),
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:8080/v1/chat/completions");
        assert_eq!(config.endpoint.model, "mistralai/mistral-7b-instruct");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_rejects_bad_url() {
        let result = TranslatorConfig::load(&FixedKey(None), lookup(&[(API_URL_VAR, "ftp://x.y")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));

        let result = TranslatorConfig::load(&FixedKey(None), lookup(&[(API_URL_VAR, "nope")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}
