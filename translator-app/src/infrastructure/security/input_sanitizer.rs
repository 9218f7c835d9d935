use translator_errors::TranslationError;

pub const MAX_TEXT_LENGTH: usize = 5000;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Drops control characters other than line breaks and tabs, trims, and
    /// rejects empty or oversized input.
    pub fn validate_text(text: &str) -> Result<String, TranslationError> {
        let stripped: String = text
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();
        let text = stripped.trim();

        if text.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let length = text.chars().count();
        if length > MAX_TEXT_LENGTH {
            return Err(TranslationError::InputTooLong(length));
        }

        Ok(text.to_string())
    }
}
