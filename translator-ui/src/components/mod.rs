mod hero;
mod language_picker;
mod text_input;
mod translation_display;
mod translator_form;

pub use hero::Hero;
pub use language_picker::LanguagePicker;
pub use text_input::TextInput;
pub use translation_display::TranslationDisplay;
pub use translator_form::TranslatorForm;
