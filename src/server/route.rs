use super::{ActivityRepository, SignupError};
use crate::config::ServerConfig;
use crate::model::{ActivityCatalog, MessageResponse};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

type Repository = Arc<dyn ActivityRepository>;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// `GET /activities` plus the signup and unregister actions.
pub fn create_activities_route(repository: Repository) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup))
        .route("/activities/:activity_name/unregister", post(unregister))
        .with_state(repository)
}

/// The whole backend: API routes, the static client under `/static` and a
/// redirect from `/` to the page.
pub fn create_app(config: &ServerConfig, repository: Repository) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(create_activities_route(repository))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}

async fn list_activities(
    State(repository): State<Repository>,
) -> Result<Json<ActivityCatalog>, SignupError> {
    Ok(Json(repository.list_activities().await?))
}

async fn signup(
    State(repository): State<Repository>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, SignupError> {
    repository.signup(&activity_name, &query.email).await?;
    tracing::info!("Signed up {} for {}", query.email, activity_name);
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

async fn unregister(
    State(repository): State<Repository>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, SignupError> {
    repository.unregister(&activity_name, &query.email).await?;
    tracing::info!("Unregistered {} from {}", query.email, activity_name);
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
