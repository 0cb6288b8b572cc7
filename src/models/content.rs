use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// A pair of translations for one piece of text.
///
/// Server content may be partial; `get` falls back to the other locale
/// so every bilingual entity resolves to a displayable string in both
/// supported languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub hi: String,
}

impl Bilingual {
    pub fn new(en: &str, hi: &str) -> Self {
        Self {
            en: en.to_string(),
            hi: hi.to_string(),
        }
    }

    /// Text for the locale, falling back to the other one when the
    /// requested translation is missing.
    pub fn get(&self, lang: Lang) -> &str {
        let (wanted, fallback) = match lang {
            Lang::En => (&self.en, &self.hi),
            Lang::Hi => (&self.hi, &self.en),
        };
        if wanted.is_empty() { fallback } else { wanted }
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.hi.is_empty()
    }
}

/// Server-owned page content block (about, history, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub slug: String,
    #[serde(default)]
    pub title: Bilingual,
    #[serde(default)]
    pub body: Bilingual,
}
