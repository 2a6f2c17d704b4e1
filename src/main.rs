use anyhow::Result;
use prakriti_classifier::artifacts::Artifacts;
use prakriti_classifier::config::Config;
use prakriti_classifier::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prakriti_classifier=info".parse()?),
        )
        .init();

    info!("Starting Prakriti classifier service");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    // Load pretrained artifacts; a failure here is fatal and the server
    // never starts
    let artifacts = Artifacts::load(&config.model_path, &config.encoders_path)?;
    info!(
        "Loaded artifacts: {} features, {} constitution classes",
        artifacts.catalog().len(),
        artifacts.encoders.label.classes.len()
    );

    let state = AppState::new(config, artifacts)?;
    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
