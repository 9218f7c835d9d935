use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use translator_errors::TranslationError;

/// One of the languages offered by the pickers. Deserializes through
/// [`FromStr`], so JSON accepts the same spellings as the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    English,
    Russian,
    Spanish,
    French,
    German,
}

impl Language {
    /// Every language in picker order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Russian,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|language| {
                language.display_name().eq_ignore_ascii_case(wanted)
                    || language.code().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| TranslationError::UnsupportedLanguage(wanted.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = TranslationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
