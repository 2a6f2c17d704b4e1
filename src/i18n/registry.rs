//! Language registry: single source of truth for the supported languages.
//!
//! The set is fixed: English is the canonical language the remedy texts are
//! written in, and nine Indian languages are offered as translation targets.
//! The registry uses a singleton with `OnceLock` for thread-safe, immutable
//! access after first initialization.

use crate::i18n::strings;
use crate::i18n::LanguageStrings;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "Hindi")
    pub name: &'static str,

    /// Native name of the language (e.g., "हिन्दी")
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Localized user-facing strings
    pub strings: LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in selector display order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if zero or more than one canonical language is configured,
    /// which indicates a registry definition error.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The ten languages offered by the questionnaire, English first.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            strings: strings::ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_canonical: false,
            enabled: true,
            strings: strings::HINDI_STRINGS,
        },
        LanguageConfig {
            code: "mr",
            name: "Marathi",
            native_name: "मराठी",
            is_canonical: false,
            enabled: true,
            strings: strings::MARATHI_STRINGS,
        },
        LanguageConfig {
            code: "gu",
            name: "Gujarati",
            native_name: "ગુજરાતી",
            is_canonical: false,
            enabled: true,
            strings: strings::GUJARATI_STRINGS,
        },
        LanguageConfig {
            code: "bn",
            name: "Bengali",
            native_name: "বাংলা",
            is_canonical: false,
            enabled: true,
            strings: strings::BENGALI_STRINGS,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            is_canonical: false,
            enabled: true,
            strings: strings::TAMIL_STRINGS,
        },
        LanguageConfig {
            code: "te",
            name: "Telugu",
            native_name: "తెలుగు",
            is_canonical: false,
            enabled: true,
            strings: strings::TELUGU_STRINGS,
        },
        LanguageConfig {
            code: "kn",
            name: "Kannada",
            native_name: "ಕನ್ನಡ",
            is_canonical: false,
            enabled: true,
            strings: strings::KANNADA_STRINGS,
        },
        LanguageConfig {
            code: "ml",
            name: "Malayalam",
            native_name: "മലയാളം",
            is_canonical: false,
            enabled: true,
            strings: strings::MALAYALAM_STRINGS,
        },
        LanguageConfig {
            code: "pa",
            name: "Punjabi",
            native_name: "ਪੰਜਾਬੀ",
            is_canonical: false,
            enabled: true,
            strings: strings::PUNJABI_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_exactly_ten_enabled_languages() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_enabled().len(), 10);
    }

    #[test]
    fn test_english_is_canonical() {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();

        assert_eq!(canonical.code, "en");
        assert_eq!(canonical.name, "English");
    }

    #[test]
    fn test_only_one_canonical() {
        let registry = LanguageRegistry::get();
        let canonical_count = registry
            .list_enabled()
            .iter()
            .filter(|lang| lang.is_canonical)
            .count();

        assert_eq!(canonical_count, 1);
    }

    #[test]
    fn test_get_by_code_all_ten() {
        let registry = LanguageRegistry::get();
        for code in ["en", "hi", "mr", "gu", "bn", "ta", "te", "kn", "ml", "pa"] {
            let config = registry.get_by_code(code);
            assert!(config.is_some(), "missing language {}", code);
            assert!(config.unwrap().enabled);
        }
    }

    #[test]
    fn test_get_by_code_unknown() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("ta"));
        assert!(!registry.is_enabled("de"));
    }

    #[test]
    fn test_english_first_in_selector_order() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_enabled()[0].code, "en");
    }

    #[test]
    fn test_native_names_differ_from_english_names() {
        let registry = LanguageRegistry::get();
        let hindi = registry.get_by_code("hi").unwrap();

        assert_eq!(hindi.name, "Hindi");
        assert_eq!(hindi.native_name, "हिन्दी");
    }

    #[test]
    fn test_canonical_has_no_translation_failure_notice() {
        let registry = LanguageRegistry::get();
        assert!(registry.canonical().strings.translation_failure_notice.is_empty());
    }

    #[test]
    fn test_targets_have_translation_failure_notice() {
        let registry = LanguageRegistry::get();
        for lang in registry.list_enabled() {
            if !lang.is_canonical {
                assert!(
                    !lang.strings.translation_failure_notice.is_empty(),
                    "language {} is missing a failure notice",
                    lang.code
                );
            }
        }
    }
}
