use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::metrics::{encode_metrics, status_class, HTTP_REQUESTS_TOTAL};
use common::types::Health;
use service::runtime::{AppTodoService, AppUserService, Services};

use crate::openapi::ApiDoc;

pub mod todos;
pub mod users;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<AppUserService>,
    pub todos: Arc<AppTodoService>,
}

impl From<Services> for AppState {
    fn from(s: Services) -> Self {
        Self { users: s.users, todos: s.todos }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn track_metrics(req: Request, next: Next) -> Response {
    let res = next.run(req).await;
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[status_class(res.status().as_u16())])
        .inc();
    res
}

/// Build the full application router: user and todo APIs plus health, metrics and docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let user_routes = Router::new()
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/by-email", get(users::get_by_email))
        .route(
            "/api/users/:id",
            get(users::get).put(users::rename).patch(users::rename).delete(users::delete),
        )
        .route("/api/users/:id/name", patch(users::rename));

    let todo_routes = Router::new()
        .route("/api/todos", get(todos::list_by_assignee).post(todos::create))
        .route("/api/todos/:id", get(todos::get).delete(todos::delete))
        .route("/api/todos/:id/done", patch(todos::set_done))
        .route("/api/todos/:id/assignee", patch(todos::assign))
        .route("/api/todos/:id/description", patch(todos::edit));

    public
        .merge(user_routes)
        .merge(todo_routes)
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
