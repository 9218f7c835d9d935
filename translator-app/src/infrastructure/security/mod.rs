mod input_sanitizer;

pub use input_sanitizer::{InputSanitizer, MAX_TEXT_LENGTH};
