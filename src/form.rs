//! Declarative form rendering and result pages.
//!
//! Pure string building: the questionnaire is generated from the feature
//! catalog, so the form can only ever offer categories the encoders know.
//! No side effects until the form is explicitly submitted.

use crate::artifacts::Encoder;
use crate::i18n::{Language, LanguageRegistry};
use crate::narration::Narration;
use crate::predictor::Prakriti;
use crate::translation::Localized;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use uuid::Uuid;

/// Placeholder shown on every unanswered question. Its submitted value is the
/// empty string, which the validator treats as "unanswered".
pub const PLACEHOLDER: &str = "Select";

static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();

fn bold_regex() -> &'static Regex {
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"))
}

/// Display label for a feature key; falls back to the key itself for any
/// feature the artifact defines that this table does not know.
pub fn feature_label(feature: &str) -> &str {
    match feature {
        "gender" => "Gender",
        "bodyDevelopment" => "Body Development",
        "bodyType" => "Body Type",
        "hairColor" => "Hair Color",
        "hairThickness" => "Hair Thickness",
        "eyeColor" => "Eye Color",
        "hungerLevel" => "Hunger Level",
        "constipationTendency" => "Constipation Tendency",
        "weightVariation" => "Weight Variation",
        "sleep" => "Sleep Pattern",
        "physicalStrength" => "Physical Strength",
        "hairGraying" => "Hair Graying",
        "wrinkles" => "Wrinkles",
        "mindStability" => "Mind Stability",
        other => other,
    }
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render the lightweight remedy markup as HTML.
///
/// Line-based: `#` headings, `- ` bullet lines grouped into lists, `**bold**`
/// inline emphasis, everything else a paragraph. Content is escaped first, so
/// only the markup this function emits is live HTML.
pub fn render_markdown(text: &str) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    let mut in_list = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if in_list {
                html.push_str("</ul>\n");
                in_list = false;
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- ") {
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(&render_inline(rest));
            html.push_str("</li>\n");
            continue;
        }

        if in_list {
            html.push_str("</ul>\n");
            in_list = false;
        }

        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        if hashes > 0 {
            let level = hashes.min(4);
            let heading = trimmed[hashes..].trim_start();
            html.push_str(&format!(
                "<h{}>{}</h{}>\n",
                level,
                render_inline(heading),
                level
            ));
        } else {
            html.push_str("<p>");
            html.push_str(&render_inline(trimmed));
            html.push_str("</p>\n");
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }

    html
}

fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    bold_regex()
        .replace_all(&escaped, "<strong>$1</strong>")
        .into_owned()
}

/// Render the questionnaire page.
///
/// `selected` carries the answers already chosen, so a rejected submission
/// comes back with its selections intact. `warning` is the validation notice.
pub fn render_form(
    catalog: &[Encoder],
    selected: &HashMap<String, String>,
    language: Language,
    warning: Option<&str>,
) -> String {
    let mut body = String::new();

    body.push_str("<h1>🌿 Ayurvedic Prakriti Classifier</h1>\n");
    body.push_str(
        "<p>Answer the following questions to determine your <strong>Prakriti \
         (Body Constitution)</strong> and get personalized <strong>home remedies</strong>.</p>\n",
    );

    if let Some(warning) = warning {
        body.push_str(&format!(
            "<div class=\"warning\">{}</div>\n",
            escape_html(warning)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/predict\">\n");
    body.push_str(&render_language_select(language));

    for encoder in catalog {
        let name = escape_html(&encoder.name);
        let chosen = selected.get(&encoder.name).map(String::as_str);

        body.push_str(&format!(
            "<label for=\"{}\">{}</label>\n",
            name,
            escape_html(feature_label(&encoder.name))
        ));
        body.push_str(&format!("<select id=\"{}\" name=\"{}\">\n", name, name));

        // The placeholder is never submittable as a concrete answer
        let placeholder_selected = if chosen.is_some() { "" } else { " selected" };
        body.push_str(&format!(
            "<option value=\"\" disabled{}>{}</option>\n",
            placeholder_selected, PLACEHOLDER
        ));

        for category in &encoder.classes {
            let marker = if chosen == Some(category.as_str()) {
                " selected"
            } else {
                ""
            };
            let category = escape_html(category);
            body.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                category, marker, category
            ));
        }
        body.push_str("</select>\n");
    }

    body.push_str("<button type=\"submit\">Predict Prakriti</button>\n</form>\n");

    page("Prakriti Classifier", &body)
}

fn render_language_select(selected: Language) -> String {
    let mut html = String::new();
    html.push_str("<label for=\"language\">🌐 Choose Language</label>\n");
    html.push_str("<select id=\"language\" name=\"language\">\n");

    for lang in LanguageRegistry::get().list_enabled() {
        let marker = if lang.code == selected.code() {
            " selected"
        } else {
            ""
        };
        let display = if lang.name == lang.native_name {
            lang.name.to_string()
        } else {
            format!("{} ({})", lang.name, lang.native_name)
        };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            lang.code,
            marker,
            escape_html(&display)
        ));
    }

    html.push_str("</select>\n");
    html
}

/// Render the prediction result page.
pub fn render_result(prakriti: Prakriti, localized: &Localized, narration: &Narration) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h2>🌿 Predicted Prakriti Type: <strong>{}</strong></h2>\n",
        escape_html(prakriti.name())
    ));

    if let Some(warning) = &localized.warning {
        body.push_str(&format!(
            "<div class=\"warning\">{}</div>\n",
            escape_html(warning)
        ));
    }

    body.push_str("<div class=\"remedies\">\n");
    body.push_str(&render_markdown(&localized.text));
    body.push_str("</div>\n");

    match narration.audio_id {
        Some(id) => body.push_str(&render_audio(&id)),
        None => {
            if let Some(warning) = &narration.warning {
                body.push_str(&format!(
                    "<div class=\"warning\">{}</div>\n",
                    escape_html(warning)
                ));
            }
        }
    }

    for detail in [&localized.error_detail, &narration.error_detail]
        .into_iter()
        .flatten()
    {
        body.push_str(&format!(
            "<pre class=\"detail\">Error: {}</pre>\n",
            escape_html(detail)
        ));
    }

    body.push_str("<p><a href=\"/\">← Start over</a></p>\n");

    page("Prakriti Result", &body)
}

fn render_audio(id: &Uuid) -> String {
    format!(
        "<audio controls src=\"/audio/{}\" type=\"audio/mpeg\"></audio>\n",
        id
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f6f8f4;color:#1f2a1f;margin:0}\
main{max-width:640px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:600}\
select{width:100%;padding:.4rem;margin-top:.25rem}\
button{margin-top:1.5rem;padding:.6rem 1.2rem;background:#2f6b2f;color:#fff;border:0;border-radius:4px;cursor:pointer}\
.warning{background:#fff3cd;border:1px solid #e0c36a;padding:.6rem;border-radius:4px;margin:1rem 0}\
.detail{background:#f3f3f3;padding:.6rem;border-radius:4px;white-space:pre-wrap}\
audio{width:100%;margin-top:1rem}";
