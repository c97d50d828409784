use std::sync::Arc;

use mindscore::advice::{fetch::UserDataFetcher, routes, AdviceState};
use mindscore::config::{logging, settings::AdviceSettings};
use mindscore::services::llm::LlmClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = AdviceSettings::from_env();

    if settings.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; advice requests will fail upstream");
    }

    let llm = LlmClient::new(
        settings.google_api_key.clone().unwrap_or_default(),
        settings.base_url.clone(),
        settings.model.clone(),
    );

    let state = AdviceState {
        llm: Arc::new(llm),
        user_data: UserDataFetcher::new(settings.user_data_url.clone()),
    };

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(
        addr = %settings.bind_addr,
        user_data_url = %settings.user_data_url,
        "advice app listening"
    );

    axum::serve(listener, routes::routes(state)).await?;

    Ok(())
}
