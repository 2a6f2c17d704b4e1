//! Narration pipeline: spoken playback of the displayed remedy text.
//!
//! Markup is stripped before synthesis so the narration never vocalizes
//! heading or emphasis symbols. The clip comes from an external
//! speech-synthesis endpoint (Google Translate TTS wire format), lands in
//! the transient audio store, and is streamed back through the audio route.
//! Narration is best-effort: a failure degrades to a text-only result and
//! never blocks the display.

use crate::audio::AudioStore;
use crate::config::Config;
use crate::i18n::{Language, PipelineMetrics};
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;
use uuid::Uuid;

static EMPHASIS_REGEX: OnceLock<Regex> = OnceLock::new();
static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn emphasis_regex() -> &'static Regex {
    EMPHASIS_REGEX.get_or_init(|| Regex::new(r"\*+").expect("valid regex"))
}

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| Regex::new(r"(?m)^#+\s*").expect("valid regex"))
}

/// Outcome of narrating one remedy text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Playback id in the audio store; `None` on the degraded path
    pub audio_id: Option<Uuid>,
    pub warning: Option<String>,
    pub error_detail: Option<String>,
}

/// Strip emphasis and heading markers for spoken narration.
///
/// Runs of `*` collapse to nothing; leading `#` runs and the whitespace after
/// them are removed per line. Everything else, emojis included, is read out.
pub fn strip_markup(text: &str) -> String {
    let without_emphasis = emphasis_regex().replace_all(text, "");
    let without_headings = heading_regex().replace_all(&without_emphasis, "");
    without_headings.trim().to_string()
}

/// Fetch one synthesized clip for the cleaned text.
///
/// One request, no retries; the error is returned for the caller to degrade
/// on.
pub async fn synthesize(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    language: Language,
) -> Result<Vec<u8>> {
    if text.trim().is_empty() {
        anyhow::bail!("Nothing to narrate after markup cleanup");
    }

    let response = client
        .get(&config.tts_api_url)
        .query(&[
            ("ie", "UTF-8"),
            ("client", "tw-ob"),
            ("tl", language.code()),
            ("q", text),
        ])
        .send()
        .await
        .context("Failed to send request to speech service")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("Speech service error ({}): {}", status, body);
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read speech service response")?;
    if bytes.is_empty() {
        anyhow::bail!("Speech service returned an empty clip");
    }

    Ok(bytes.to_vec())
}

/// Narrate a displayed text, degrading gracefully on any failure.
pub async fn narrate(
    client: &reqwest::Client,
    config: &Config,
    store: &AudioStore,
    text: &str,
    language: Language,
) -> Narration {
    let metrics = PipelineMetrics::global();
    metrics.record_narration_call();

    let clean = strip_markup(text);
    let result = match synthesize(client, config, &clean, language).await {
        Ok(bytes) => store.put(&bytes),
        Err(e) => Err(e),
    };

    match result {
        Ok(id) => Narration {
            audio_id: Some(id),
            warning: None,
            error_detail: None,
        },
        Err(e) => {
            metrics.record_narration_failure();
            warn!("Narration in {} failed: {:#}", language.name(), e);
            Narration {
                audio_id: None,
                warning: Some(
                    language
                        .config()
                        .strings
                        .narration_failure_notice
                        .to_string(),
                ),
                error_detail: Some(format!("{:#}", e)),
            }
        }
    }
}
