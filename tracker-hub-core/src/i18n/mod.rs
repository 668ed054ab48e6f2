//! Internationalisation (i18n)
//!
//! Compile-time translation tables: plain structs of `&'static str`, checked
//! by the compiler, no runtime lookup.
//!
//! Spanish is the default because the backend answers in Spanish; mixing
//! languages on one screen is avoided unless the user switches.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Spanish (Spain)
    #[default]
    EsEs,
    /// English (United States)
    EnUs,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::EsEs, Language::EnUs]
    }

    /// Display name, written in the language itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EsEs => "Español",
            Language::EnUs => "English",
        }
    }

    /// BCP 47 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    /// Parses a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// Next language (cyclic)
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::EsEs => Language::EnUs,
            Language::EnUs => Language::EsEs,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EsEs => 0,
            Language::EnUs => 1,
        }
    }

    fn from_index(index: usize) -> Language {
        match index {
            1 => Language::EnUs,
            _ => Language::EsEs,
        }
    }
}

/// Current language index (atomic, thread-safe)
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EsEs

/// Translations for a given language
pub fn texts_for(lang: Language) -> &'static Translations {
    match lang {
        Language::EsEs => &es_es::TRANSLATIONS,
        Language::EnUs => &en_us::TRANSLATIONS,
    }
}

/// Translations for the current language
///
/// # Example
///
/// ```
/// use tracker_hub_core::i18n::t;
///
/// let text = t().indicator.disconnected; // "Desconectado" or "Disconnected"
/// assert!(!text.is_empty());
/// ```
pub fn t() -> &'static Translations {
    texts_for(current_language())
}

/// Sets the current language
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// Current language
pub fn current_language() -> Language {
    Language::from_index(CURRENT_LANGUAGE.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("es"), Some(Language::EsEs));
        assert_eq!(Language::from_code("en"), Some(Language::EnUs));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn next_cycles_through_all() {
        assert_eq!(Language::EsEs.next(), Language::EnUs);
        assert_eq!(Language::EnUs.next(), Language::EsEs);
    }

    #[test]
    fn spanish_keeps_backend_wording() {
        let es = texts_for(Language::EsEs);
        assert_eq!(es.indicator.disconnected, "Desconectado");
        assert_eq!(es.form.fallback_error, "Error al conectar. Verifica tus datos.");
        assert_eq!(es.tables.start, "Inicio");
    }

    #[test]
    fn english_table_is_distinct() {
        let en = texts_for(Language::EnUs);
        assert_eq!(en.indicator.disconnected, "Disconnected");
        assert_eq!(en.tables.start, "Start");
    }
}
