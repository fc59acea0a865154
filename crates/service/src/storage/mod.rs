//! Storage backends for the service layer
//!
//! - `json_map_store`: generic map persisted as a JSON file (or kept in memory)
//! - `json_repo`: user/todo repositories on top of it
//! - `seaorm`: PostgreSQL repositories

pub mod json_map_store;
pub mod json_repo;
pub mod seaorm;
