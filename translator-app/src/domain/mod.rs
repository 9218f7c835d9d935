mod language;
mod translation;
mod translation_request;
mod translator_state;

pub use language::Language;
pub use translation::Translation;
pub use translation_request::TranslationRequest;
pub use translator_state::{
    LanguageSelection, TranslatorState, TranslatorView, ENTER_TEXT_PROMPT,
};
