use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::modules::user_data::crud::UserDataSlot;
use crate::services::classifier::Classifier;
use crate::services::llm::LanguageModel;

pub mod advice;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the artifact failed to load at startup.
    pub classifier: Option<Arc<dyn Classifier>>,
    pub llm: Arc<dyn LanguageModel>,
    pub user_data: UserDataSlot,
}

impl AppState {
    pub fn new(classifier: Option<Arc<dyn Classifier>>, llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            classifier,
            llm,
            user_data: UserDataSlot::default(),
        }
    }
}

/// The prediction/chat API with permissive CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(modules::prediction::routes::routes())
        .merge(modules::chat::routes::routes())
        .merge(modules::user_data::routes::routes())
        .merge(modules::health::routes::routes())
        .with_state(state)
        .layer(cors)
}
