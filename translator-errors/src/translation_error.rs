use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TranslationError {
    #[error("missing API credential")]
    MissingCredential,

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("empty response body")]
    EmptyBody,

    #[error("decode failure: {0}")]
    DecodeFailure(String),

    #[error("response contained no choices")]
    NoChoices,

    #[error("empty input")]
    EmptyInput,

    #[error("input too long: {0} characters")]
    InputTooLong(usize),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl FromStr for TranslationError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s == "missing API credential" {
            TranslationError::MissingCredential
        } else if let Some(detail) = s.strip_prefix("transport failure: ") {
            TranslationError::TransportFailure(detail.to_string())
        } else if let Some(code) = s
            .strip_prefix("upstream returned status ")
            .and_then(|code| code.parse().ok())
        {
            TranslationError::UpstreamStatus(code)
        } else if s == "empty response body" {
            TranslationError::EmptyBody
        } else if let Some(detail) = s.strip_prefix("decode failure: ") {
            TranslationError::DecodeFailure(detail.to_string())
        } else if s == "response contained no choices" {
            TranslationError::NoChoices
        } else if s == "empty input" {
            TranslationError::EmptyInput
        } else if let Some(len) = s
            .strip_prefix("input too long: ")
            .and_then(|rest| rest.strip_suffix(" characters"))
            .and_then(|len| len.parse().ok())
        {
            TranslationError::InputTooLong(len)
        } else if let Some(language) = s.strip_prefix("unsupported language: ") {
            TranslationError::UnsupportedLanguage(language.to_string())
        } else if let Some(detail) = s.strip_prefix("internal error: ") {
            TranslationError::Internal(detail.to_string())
        } else {
            TranslationError::Internal(s.to_string())
        };
        Ok(parsed)
    }
}

impl TranslationError {
    /// Text shown in the output area of the translator screen.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => "No API key configured.".to_string(),
            Self::TransportFailure(detail) => format!("Network error: {}", detail),
            Self::UpstreamStatus(status) => format!(
                "The translation service answered with HTTP {}. Try again later.",
                status
            ),
            Self::EmptyBody => "The translation service sent an empty response.".to_string(),
            Self::DecodeFailure(detail) => {
                format!("Could not read the translation response: {}", detail)
            }
            Self::NoChoices => "The translation service returned no translation.".to_string(),
            Self::EmptyInput => "Please enter text to translate.".to_string(),
            Self::InputTooLong(len) => format!("Text is too long ({} characters).", len),
            Self::UnsupportedLanguage(language) => {
                format!("{} is not a supported language.", language)
            }
            Self::Internal(_) => "Something went wrong on the server. Try again later.".to_string(),
        }
    }

    /// Errors caused by what the user typed or picked, as opposed to the service.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InputTooLong(_) | Self::UnsupportedLanguage(_)
        )
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::TranslationError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for TranslationError {
        fn into_response(self) -> Response {
            let status = match &self {
                TranslationError::EmptyInput
                | TranslationError::InputTooLong(_)
                | TranslationError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
                TranslationError::TransportFailure(_)
                | TranslationError::UpstreamStatus(_)
                | TranslationError::EmptyBody
                | TranslationError::DecodeFailure(_)
                | TranslationError::NoChoices => StatusCode::BAD_GATEWAY,
                TranslationError::MissingCredential | TranslationError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let message = self.user_message();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
