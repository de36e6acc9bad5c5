use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Json,
};

use super::{error::ApiError, AppState};
use crate::models::*;
use crate::pages::NavKey;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

pub async fn home(State(state): State<AppState>) -> Html<String> {
    render(&state, "home", "Home", NavKey::Home).await
}

pub async fn questions_page(State(state): State<AppState>) -> Html<String> {
    render(&state, "questions", "Quiz", NavKey::Questions).await
}

async fn render(state: &AppState, page: &str, title: &str, active: NavKey) -> Html<String> {
    tracing::debug!("Rendering page {} (nav: {})", page, active.as_str());
    Html(state.pages.render(page, title, active).await)
}

// ============================================================
// Questions
// ============================================================

pub async fn random_question(
    State(state): State<AppState>,
) -> Result<Json<QuestionRecord>, ApiError> {
    Ok(Json(state.store.random()?))
}

/// Append a question. A body that is missing, malformed or lacks either
/// field is treated as empty input and rejected by validation.
pub async fn add_question(
    State(state): State<AppState>,
    payload: Result<Json<AddQuestionInput>, JsonRejection>,
) -> Result<Json<AddQuestionResponse>, ApiError> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!("Unreadable add_question body: {}", rejection);
            AddQuestionInput::default()
        }
    };

    state.store.add(
        input.question.as_deref().unwrap_or_default(),
        input.answer.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(AddQuestionResponse::ok()))
}
