use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::todos::{AssignTodoRequest, CreateTodoRequest, EditTodoRequest};
use crate::routes::users::{ChangeNameRequest, CreateUserRequest};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assignee fields are null when the assigned user has been deleted.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoViewDoc {
    pub id: Uuid,
    pub description: String,
    pub done: bool,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", description = "Users and the todos assigned to them."),
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::get_by_email,
        crate::routes::users::create,
        crate::routes::users::rename,
        crate::routes::users::delete,
        crate::routes::todos::list_by_assignee,
        crate::routes::todos::get,
        crate::routes::todos::create,
        crate::routes::todos::set_done,
        crate::routes::todos::assign,
        crate::routes::todos::edit,
        crate::routes::todos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserDoc,
            TodoViewDoc,
            CreateUserRequest,
            ChangeNameRequest,
            CreateTodoRequest,
            AssignTodoRequest,
            EditTodoRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "todos")
    )
)]
pub struct ApiDoc;
