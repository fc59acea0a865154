use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use uuid::Uuid;

use service::domain::TodoView;

use crate::errors::ApiError;
use crate::extract;
use crate::routes::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AssigneeQuery {
    pub assignee_email: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub description: String,
    pub assignee_email: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTodoRequest {
    pub new_assignee_email: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditTodoRequest {
    pub description: String,
}

#[utoipa::path(
    get, path = "/api/todos", tag = "todos",
    params(AssigneeQuery),
    responses(
        (status = 200, description = "Todos of the assignee", body = [crate::openapi::TodoViewDoc]),
        (status = 404, description = "Unknown assignee", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_by_assignee(
    State(state): State<AppState>,
    extract::Query(q): extract::Query<AssigneeQuery>,
) -> Result<Json<Vec<TodoView>>, ApiError> {
    Ok(Json(state.todos.views_by_assignee_email(&q.assignee_email).await?))
}

#[utoipa::path(
    get, path = "/api/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo found", body = crate::openapi::TodoViewDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, extract::Path(id): extract::Path<Uuid>) -> Result<Json<TodoView>, ApiError> {
    let todo = state.todos.get_by_id(id).await?;
    Ok(Json(state.todos.view(todo).await?))
}

#[utoipa::path(
    post, path = "/api/todos", tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Created", body = crate::openapi::TodoViewDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown assignee", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    extract::Json(input): extract::Json<CreateTodoRequest>,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state.todos.create(&input.description, &input.assignee_email).await?;
    Ok(Json(state.todos.view(todo).await?))
}

#[utoipa::path(
    patch, path = "/api/todos/{id}/done", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    request_body(content = bool, description = "New completion flag"),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TodoViewDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn set_done(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(done): extract::Json<bool>,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state.todos.set_done(id, done).await?;
    Ok(Json(state.todos.view(todo).await?))
}

#[utoipa::path(
    patch, path = "/api/todos/{id}/assignee", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    request_body = AssignTodoRequest,
    responses(
        (status = 200, description = "Reassigned", body = crate::openapi::TodoViewDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown todo or assignee", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn assign(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(input): extract::Json<AssignTodoRequest>,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state.todos.assign(id, &input.new_assignee_email).await?;
    Ok(Json(state.todos.view(todo).await?))
}

#[utoipa::path(
    patch, path = "/api/todos/{id}/description", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    request_body = EditTodoRequest,
    responses(
        (status = 200, description = "Edited", body = crate::openapi::TodoViewDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn edit(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(input): extract::Json<EditTodoRequest>,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state.todos.edit(id, &input.description).await?;
    Ok(Json(state.todos.view(todo).await?))
}

#[utoipa::path(
    delete, path = "/api/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, extract::Path(id): extract::Path<Uuid>) -> Result<StatusCode, ApiError> {
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
