use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use service::domain::User;

use crate::errors::ApiError;
use crate::extract;
use crate::routes::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: String,
}

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses((status = 200, description = "All users", body = [crate::openapi::UserDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, extract::Path(id): extract::Path<Uuid>) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/api/users/by-email", tag = "users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_email(State(state): State<AppState>, extract::Query(q): extract::Query<EmailQuery>) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get_by_email(&q.email).await?))
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    extract::Json(input): extract::Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(&input.name, &input.email).await?;
    info!(user_id = %user.id, "user_create_request");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Served on `PUT /api/users/{id}`, `PATCH /api/users/{id}` and `PATCH /api/users/{id}/name`.
#[utoipa::path(
    patch, path = "/api/users/{id}/name", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = ChangeNameRequest,
    responses(
        (status = 200, description = "Renamed", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn rename(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(input): extract::Json<ChangeNameRequest>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.rename(id, &input.name).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, extract::Path(id): extract::Path<Uuid>) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
