//! Localization pipeline: remedy text to the selected language.
//!
//! The canonical language short-circuits to the identity. Everything else
//! goes to an external translation service (LibreTranslate-compatible API)
//! with the source language auto-detected. A failure never crashes the
//! request: the caller gets the original English text back together with the
//! localized failure notice and the error detail.

use crate::config::Config;
use crate::i18n::{Language, PipelineMetrics, TranslationValidator};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Translation request body (LibreTranslate wire format)
#[derive(Debug, Serialize)]
struct TranslateRequest {
    q: String,
    source: String,
    target: String,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Outcome of localizing one remedy text.
///
/// `language` is the language of `text` as displayed: the requested target on
/// success, the canonical language after a fallback. Narration must follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub text: String,
    pub language: Language,
    pub warning: Option<String>,
    pub error_detail: Option<String>,
}

/// Translate a text to the target language.
///
/// Returns the text unchanged when the target is canonical. Otherwise one
/// request, no retries; the error is returned for the caller to degrade on.
pub async fn translate_text(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    target: Language,
) -> Result<String> {
    if target.is_canonical() {
        return Ok(text.to_string());
    }

    let request = TranslateRequest {
        q: text.to_string(),
        source: "auto".to_string(),
        target: target.code().to_string(),
        format: "text".to_string(),
        api_key: config.translate_api_key.clone(),
    };

    let response = client
        .post(&config.translate_api_url)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to translation service")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("Translation service error ({}): {}", status, body);
    }

    let parsed: TranslateResponse = response
        .json()
        .await
        .context("Failed to parse translation response")?;

    // Warn-only structure check; a mangled translation is still shown
    let validation = TranslationValidator::validate(text, &parsed.translated_text);
    if validation.has_errors() {
        anyhow::bail!(
            "Translation to {} rejected: {}",
            target.name(),
            validation.errors.join("; ")
        );
    }
    if validation.has_warnings() {
        warn!(
            "Translation validation warnings for {} ({}): {:?}",
            target.name(),
            target.code(),
            validation.warnings
        );
    }

    Ok(parsed.translated_text)
}

/// Localize a remedy text, degrading gracefully on any failure.
pub async fn localize(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    target: Language,
) -> Localized {
    let metrics = PipelineMetrics::global();

    if target.is_canonical() {
        metrics.record_identity_passthrough();
        return Localized {
            text: text.to_string(),
            language: target,
            warning: None,
            error_detail: None,
        };
    }

    metrics.record_translation_call();
    match translate_text(client, config, text, target).await {
        Ok(translated) => Localized {
            text: translated,
            language: target,
            warning: None,
            error_detail: None,
        },
        Err(e) => {
            metrics.record_translation_failure();
            warn!("Translation to {} failed: {:#}", target.name(), e);
            Localized {
                text: text.to_string(),
                language: Language::canonical(),
                warning: Some(
                    target
                        .config()
                        .strings
                        .translation_failure_notice
                        .to_string(),
                ),
                error_detail: Some(format!("{:#}", e)),
            }
        }
    }
}
