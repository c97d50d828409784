use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::advice::{page, prompt::advice_prompt, AdviceState};

#[derive(Debug, Deserialize)]
pub struct AdviceForm {
    pub message: String,
}

pub async fn index() -> Html<String> {
    Html(page::render(""))
}

pub async fn ask(State(state): State<AdviceState>, Form(form): Form<AdviceForm>) -> Html<String> {
    let user_data = state.user_data.fetch().await;
    let prompt = advice_prompt(&user_data, &form.message);

    let reply = match state.llm.generate(&prompt.render()).await {
        Ok(result) => result.text,
        Err(e) => {
            tracing::error!(model = state.llm.model(), error = %e, "advice generation failed");
            format!("Error: {}", e)
        }
    };

    Html(page::render(&reply))
}
