use super::{Language, Translation, TranslationRequest};
use serde::{Deserialize, Serialize};
use translator_errors::TranslationError;

/// Output shown when the trigger is pressed with nothing to translate.
pub const ENTER_TEXT_PROMPT: &str = "Please enter text to translate.";

const TRIGGER_IDLE_LABEL: &str = "Translate";
const TRIGGER_BUSY_LABEL: &str = "Translating...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSelection {
    pub source: Language,
    pub target: Language,
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self {
            source: Language::English,
            target: Language::Russian,
        }
    }
}

impl LanguageSelection {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub fn set_source(&mut self, language: Language) {
        self.source = language;
    }

    pub fn set_target(&mut self, language: Language) {
        self.target = language;
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }
}

/// Everything the translator screen shows, mutated explicitly and then
/// projected through [`TranslatorState::render`].
#[derive(Debug, Clone, Default)]
pub struct TranslatorState {
    selection: LanguageSelection,
    input: String,
    output: String,
    failed: bool,
    busy: bool,
}

impl TranslatorState {
    pub fn new(selection: LanguageSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn selection(&self) -> LanguageSelection {
        self.selection
    }

    pub fn set_source(&mut self, language: Language) {
        self.selection.set_source(language);
    }

    pub fn set_target(&mut self, language: Language) {
        self.selection.set_target(language);
    }

    pub fn swap_languages(&mut self) {
        self.selection.swap();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    fn has_visible_input(&self) -> bool {
        self.input
            .chars()
            .any(|c| !c.is_control() && !c.is_whitespace())
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Presses the trigger. Returns the request to send, or `None` when a
    /// request is already in flight or there is nothing to translate.
    pub fn begin(&mut self) -> Option<TranslationRequest> {
        if self.busy {
            return None;
        }

        if !self.has_visible_input() {
            self.output = ENTER_TEXT_PROMPT.to_string();
            self.failed = false;
            return None;
        }

        self.busy = true;
        Some(TranslationRequest::new(
            self.selection.source,
            self.selection.target,
            self.input.clone(),
        ))
    }

    /// Delivers the outcome of the request handed out by [`Self::begin`].
    /// The trigger is re-enabled on every outcome.
    pub fn settle(&mut self, result: Result<Translation, TranslationError>) {
        match result {
            Ok(translation) => {
                self.output = translation.translated_text;
                self.failed = false;
            }
            Err(e) => {
                self.output = e.user_message();
                self.failed = true;
            }
        }
        self.busy = false;
    }

    pub fn render(&self) -> TranslatorView {
        TranslatorView {
            source_label: format!("From: {}", self.selection.source),
            target_label: format!("To: {}", self.selection.target),
            source: self.selection.source,
            target: self.selection.target,
            input: self.input.clone(),
            output: self.output.clone(),
            output_is_error: self.failed,
            trigger_enabled: !self.busy,
            trigger_label: if self.busy {
                TRIGGER_BUSY_LABEL
            } else {
                TRIGGER_IDLE_LABEL
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorView {
    pub source_label: String,
    pub target_label: String,
    pub source: Language,
    pub target: Language,
    pub input: String,
    pub output: String,
    pub output_is_error: bool,
    pub trigger_enabled: bool,
    pub trigger_label: &'static str,
}
