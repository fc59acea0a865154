//! SeaORM entities and column-level validation for the PostgreSQL backend.

pub mod errors;
pub mod db;
pub mod user;
pub mod todo;

#[cfg(test)]
mod tests;
