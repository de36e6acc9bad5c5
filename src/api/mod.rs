mod error;
mod handlers;

pub use error::ApiError;

use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::pages::PageRenderer;
use crate::store::QuestionStore;

/// Everything a request handler can reach.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: QuestionStore,
    pub pages: PageRenderer,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: QuestionStore, pages: PageRenderer, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            pages,
            static_dir: static_dir.into(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/questions", get(handlers::questions_page))
        // Questions
        .route("/question", post(handlers::random_question))
        .route("/add_question", post(handlers::add_question))
        // Health
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
