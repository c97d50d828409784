use axum::{routing::post, Router};

use crate::modules::prediction::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", post(controller::predict))
}
