use axum::{routing::get, Router};

use crate::advice::{controller, AdviceState};

pub fn routes(state: AdviceState) -> Router {
    Router::new()
        .route("/", get(controller::index).post(controller::ask))
        .with_state(state)
}
