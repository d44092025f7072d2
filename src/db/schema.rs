//! SQL DDL for initializing the cafe list storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `name` UNIQUE (creates an index implicitly)
/// - Rating columns stored as the exact display strings
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS cafes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    coffee TEXT NOT NULL,
    wifi TEXT NOT NULL,
    socket TEXT NOT NULL,
    location TEXT NOT NULL
);
"#;
