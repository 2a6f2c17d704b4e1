//! Translation structure validation.
//!
//! The remedy texts carry lightweight markup (headings, bullet lines) that
//! the result page renders and the narration pipeline strips. A translation
//! service occasionally mangles that structure; the checks here are warn-only
//! and never fail a request.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report for one translated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (e.g., the translation came back empty)
    pub errors: Vec<String>,

    /// Structural drift worth logging but not acting on
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated remedy texts.
pub struct TranslationValidator;

static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| Regex::new(r"(?m)^#+").expect("valid regex"))
}

fn bullet_regex() -> &'static Regex {
    BULLET_REGEX.get_or_init(|| Regex::new(r"(?m)^\s*-\s+").expect("valid regex"))
}

impl TranslationValidator {
    /// Compare a translation against its source text.
    ///
    /// Checks that the translation is non-empty and that the heading and
    /// bullet structure survived. Counts, not content: the words are expected
    /// to change, the shape of the document is not.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push("translation is empty".to_string());
            return report;
        }

        let original_headings = heading_regex().find_iter(original).count();
        let translated_headings = heading_regex().find_iter(translated).count();
        if original_headings != translated_headings {
            report.warnings.push(format!(
                "heading count changed: {} -> {}",
                original_headings, translated_headings
            ));
        }

        let original_bullets = bullet_regex().find_iter(original).count();
        let translated_bullets = bullet_regex().find_iter(translated).count();
        if original_bullets != translated_bullets {
            report.warnings.push(format!(
                "bullet count changed: {} -> {}",
                original_bullets, translated_bullets
            ));
        }

        report
    }
}
