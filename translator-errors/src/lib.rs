mod translation_error;

pub use translation_error::TranslationError;
