//! Form-based advice web app. It reads the API's user-data snapshot and talks
//! to its own language model client, never to the API's `/chat` endpoint.

use std::sync::Arc;

use crate::services::llm::LanguageModel;

pub mod controller;
pub mod fetch;
pub mod page;
pub mod prompt;
pub mod routes;

#[derive(Clone)]
pub struct AdviceState {
    pub llm: Arc<dyn LanguageModel>,
    pub user_data: fetch::UserDataFetcher,
}
