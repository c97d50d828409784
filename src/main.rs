use std::sync::Arc;

use mindscore::config::{logging, settings::Settings};
use mindscore::services::classifier::{Classifier, TreeClassifier};
use mindscore::services::llm::LlmClient;
use mindscore::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = Settings::from_env()?;

    let classifier: Option<Arc<dyn Classifier>> = match TreeClassifier::load(&settings.model_path) {
        Ok(tree) => {
            tracing::info!(path = %settings.model_path.display(), name = ?tree.name, "ML model loaded");
            Some(Arc::new(tree) as Arc<dyn Classifier>)
        }
        Err(e) => {
            tracing::warn!(path = %settings.model_path.display(), error = %e, "Could not load ML model");
            None
        }
    };

    let llm = LlmClient::with_required_key(
        settings.gemini_api_key.clone(),
        settings.gemini_base_url.clone(),
        settings.gemini_model.clone(),
    )?;

    let app = mindscore::app(AppState::new(classifier, Arc::new(llm)));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(addr = %settings.bind_addr, model = %settings.gemini_model, "Mind Score API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
