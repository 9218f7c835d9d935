mod translate_text;

pub use translate_text::TranslateText;
