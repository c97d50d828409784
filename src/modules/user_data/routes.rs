use axum::{routing::get, Router};

use crate::modules::user_data::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/user-data", get(controller::get_user_data))
}
