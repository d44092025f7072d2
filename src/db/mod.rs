//! Database module: model and schema for the persisted cafe list.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `cafes` row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage handle wrapping the connection pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Cafe;
pub use schema::SQLITE_INIT;
pub use sqlite::{CafeStorage, SqlitePool};
