use std::fmt;
use std::str::FromStr;

use crate::error::TcgDexError;

pub const API_BASE: &str = "https://api.tcgdex.net/v2";

/// Locale the upstream uses for display strings (names, effects, ...).
///
/// The language code is substituted into the base path, so the same card id
/// resolves to the same card in every locale; only the text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    LatinAmericanSpanish,
    Italian,
    Portuguese,
    BrazilianPortuguese,
    EuropeanPortuguese,
    German,
    Dutch,
    Polish,
    Russian,
    Japanese,
    Korean,
    TraditionalChinese,
    SimplifiedChinese,
    Indonesian,
    Thai,
}

impl Language {
    pub const ALL: [Language; 18] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::LatinAmericanSpanish,
        Language::Italian,
        Language::Portuguese,
        Language::BrazilianPortuguese,
        Language::EuropeanPortuguese,
        Language::German,
        Language::Dutch,
        Language::Polish,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::TraditionalChinese,
        Language::SimplifiedChinese,
        Language::Indonesian,
        Language::Thai,
    ];

    /// The path segment the upstream expects for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::LatinAmericanSpanish => "es-mx",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::BrazilianPortuguese => "pt-br",
            Language::EuropeanPortuguese => "pt-pt",
            Language::German => "de",
            Language::Dutch => "nl",
            Language::Polish => "pl",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::TraditionalChinese => "zh-tw",
            Language::SimplifiedChinese => "zh-cn",
            Language::Indonesian => "id",
            Language::Thai => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TcgDexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| TcgDexError::InvalidRequest(format!("Unknown language code: {}", s)))
    }
}

/// Base path for a locale, e.g. `https://api.tcgdex.net/v2/en`.
pub fn base_path(api_base: &str, language: Language) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), language.code())
}
