use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Pretrained artifacts
    pub model_path: String,
    pub encoders_path: String,

    // Translation service
    pub translate_api_url: String,
    pub translate_api_key: Option<String>,

    // Speech synthesis service
    pub tts_api_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Artifacts
            model_path: std::env::var("PRAKRITI_MODEL_PATH")
                .unwrap_or_else(|_| "data/prakriti_model.json".to_string()),
            encoders_path: std::env::var("PRAKRITI_ENCODERS_PATH")
                .unwrap_or_else(|_| "data/prakriti_encoders.json".to_string()),

            // Translation
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "https://libretranslate.com/translate".to_string()),
            translate_api_key: std::env::var("TRANSLATE_API_KEY").ok(),

            // Speech synthesis
            tts_api_url: std::env::var("TTS_API_URL")
                .unwrap_or_else(|_| "https://translate.google.com/translate_tts".to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
