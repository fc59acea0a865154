//! Backend selection and service wiring for binaries.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use migration::MigratorTrait;
use tracing::info;

use configs::{AppConfig, StorageBackend};
use models::db::{connect_with_config, DatabaseConfig};

use crate::repository::{TodoRepository, UserRepository};
use crate::storage::json_repo::{JsonTodoRepository, JsonUserRepository};
use crate::storage::seaorm::{SeaOrmTodoRepository, SeaOrmUserRepository};
use crate::todo_service::TodoService;
use crate::user_service::UserService;

pub type AppUserService = UserService<dyn UserRepository>;
pub type AppTodoService = TodoService<dyn TodoRepository, dyn UserRepository>;

/// Repository handles for the configured backend.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub todos: Arc<dyn TodoRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(JsonUserRepository::in_memory()),
            todos: Arc::new(JsonTodoRepository::in_memory()),
        }
    }
}

/// Open the backend named by `storage.backend`.
///
/// Postgres connects with the configured pool and applies pending migrations;
/// the file backend keeps `users.json` and `todos.json` under `storage.data_dir`.
pub async fn build_repositories(cfg: &AppConfig) -> anyhow::Result<Repositories> {
    match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = connect_with_config(&DatabaseConfig::from(&cfg.database))
                .await
                .context("connect database")?;
            migration::Migrator::up(&db, None).await.context("run migrations")?;
            info!(backend = "postgres", "storage ready");
            Ok(Repositories {
                users: Arc::new(SeaOrmUserRepository { db: db.clone() }),
                todos: Arc::new(SeaOrmTodoRepository { db }),
            })
        }
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
            let dir = Path::new(&cfg.storage.data_dir);
            let users = JsonUserRepository::open(dir.join("users.json")).await?;
            let todos = JsonTodoRepository::open(dir.join("todos.json")).await?;
            info!(backend = "file", data_dir = %cfg.storage.data_dir, "storage ready");
            Ok(Repositories { users: Arc::new(users), todos: Arc::new(todos) })
        }
        StorageBackend::Memory => {
            info!(backend = "memory", "storage ready");
            Ok(Repositories::in_memory())
        }
    }
}

/// Services shared by request handlers.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<AppUserService>,
    pub todos: Arc<AppTodoService>,
}

impl Services {
    pub fn new(repos: Repositories) -> Self {
        let users = Arc::new(UserService::new(repos.users));
        let todos = Arc::new(TodoService::new(repos.todos, Arc::clone(&users)));
        Self { users, todos }
    }

    pub fn in_memory() -> Self { Self::new(Repositories::in_memory()) }
}
