//! HTTP surface and the submission cycle.
//!
//! One submission runs sequentially: validate, predict, resolve, localize,
//! narrate, render. Localization and narration failures degrade the result
//! in place; they never bounce the request back to an earlier stage.

use crate::artifacts::Artifacts;
use crate::audio::AudioStore;
use crate::config::Config;
use crate::form;
use crate::i18n::{Language, PipelineMetrics};
use crate::narration;
use crate::predictor;
use crate::remedies;
use crate::translation;
use anyhow::Result;
use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Shared immutable state for the request-handling path. The artifacts are
/// loaded once at startup; the audio store is the only mutable piece.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub artifacts: Arc<Artifacts>,
    pub client: reqwest::Client,
    pub audio: Arc<AudioStore>,
}

impl AppState {
    pub fn new(config: Config, artifacts: Artifacts) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            artifacts: Arc::new(artifacts),
            client: reqwest::Client::new(),
            audio: Arc::new(AudioStore::new()?),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/predict", post(predict))
        .route("/audio/:id", get(audio_clip))
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Features still unanswered or answered outside their catalog.
///
/// The form only offers catalog values, so a non-catalog value can only come
/// from a hand-crafted request; it is rejected the same way as the
/// placeholder so the predictor only ever sees encodable answers.
pub fn unanswered_features(
    artifacts: &Artifacts,
    response: &HashMap<String, String>,
) -> Vec<String> {
    artifacts
        .catalog()
        .iter()
        .filter(|encoder| match response.get(&encoder.name) {
            Some(value) => !encoder.contains(value),
            None => true,
        })
        .map(|encoder| encoder.name.clone())
        .collect()
}

fn selected_language(response: &HashMap<String, String>) -> Language {
    response
        .get("language")
        .and_then(|code| Language::from_code(code).ok())
        .unwrap_or_else(Language::canonical)
}

async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(form::render_form(
        state.artifacts.catalog(),
        &HashMap::new(),
        Language::canonical(),
        None,
    ))
}

async fn predict(
    State(state): State<AppState>,
    Form(response): Form<HashMap<String, String>>,
) -> Response {
    let language = selected_language(&response);

    let missing = unanswered_features(&state.artifacts, &response);
    if !missing.is_empty() {
        debug!("Submission rejected, unanswered features: {:?}", missing);
        return Html(form::render_form(
            state.artifacts.catalog(),
            &response,
            language,
            Some(language.config().strings.incomplete_form_warning),
        ))
        .into_response();
    }

    let prakriti = match predictor::predict(&state.artifacts, &response) {
        Ok(prakriti) => prakriti,
        Err(e) => {
            // Unreachable through the form; fatal for this request
            error!("Prediction failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Prediction failed</h1><p>Please try again.</p>".to_string()),
            )
                .into_response();
        }
    };
    info!("Predicted constitution: {}", prakriti);

    let remedy = remedies::remedy_for_label(prakriti.name());

    let localized =
        translation::localize(&state.client, &state.config, remedy, language).await;

    // Narrate what is actually displayed, in the language it ended up in
    let narration = narration::narrate(
        &state.client,
        &state.config,
        &state.audio,
        &localized.text,
        localized.language,
    )
    .await;

    Html(form::render_result(prakriti, &localized, &narration)).into_response()
}

async fn audio_clip(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.audio.get(&id) {
        Some(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn metrics() -> Json<crate::i18n::MetricsReport> {
    Json(PipelineMetrics::global().report())
}

async fn health() -> &'static str {
    "ok"
}
