//! Service layer for users and todos.
//! - Business rules live here; persistence sits behind the repository traits.
//! - Reuses validation and entity definitions from the `models` crate.
//! - `runtime` wires the configured backend into shareable services.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod storage;
pub mod user_service;
pub mod todo_service;
pub mod seed;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
