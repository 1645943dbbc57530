//! SOXFlow server binary.
//!
//! Loads `.env` / XDG config into the environment, initializes logging, builds the OpenAI
//! backend from `OPENAI_API_KEY`, then serves `POST /generate-docs` until Ctrl-C.

mod logging;

use serve::ServeConfig;
use soxflow::DocGenerator;

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logging is not up yet, so config problems go to stderr directly.
    if let Err(e) = config::load_and_apply("soxflow", None) {
        eprintln!("soxflow: config not loaded: {}", e);
    }
    logging::init()?;

    let settings = ServeConfig::from_env();
    let generator = DocGenerator::openai_from_env();
    tracing::info!(
        model = soxflow::DEFAULT_MODEL,
        temperature = soxflow::DEFAULT_TEMPERATURE,
        addr = %settings.addr,
        "starting soxflow"
    );
    serve::run_serve(settings, generator).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("soxflow: {}", e);
        std::process::exit(1);
    }
}
