use crate::db::models::Cafe;
use crate::db::schema::SQLITE_INIT;
use crate::error::CafeError;
use crate::types::form::NewCafe;
use crate::types::rating::Scale;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct CafeStorage {
    pool: SqlitePool,
}

impl CafeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database, creating the file if absent.
    pub async fn open(database_url: &str) -> Result<Self, CafeError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CafeError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a validated entry. Returns the assigned row id.
    /// A duplicate `name` surfaces as `CafeError::NameTaken`.
    pub async fn insert(&self, cafe: &NewCafe) -> Result<i64, CafeError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafes (name, coffee, wifi, socket, location)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cafe.name)
        .bind(cafe.coffee.display(Scale::Coffee))
        .bind(cafe.wifi.display(Scale::Wifi))
        .bind(cafe.socket.display(Scale::Socket))
        .bind(&cafe.location)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(CafeError::NameTaken(cafe.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All entries in insertion order (primary key).
    pub async fn list_all(&self) -> Result<Vec<Cafe>, CafeError> {
        let rows = sqlx::query(
            r#"SELECT id, name, coffee, wifi, socket, location
               FROM cafes ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Cafe>, CafeError> {
        let row = sqlx::query(
            r#"SELECT id, name, coffee, wifi, socket, location
               FROM cafes WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Delete by id. Returns the number of rows removed (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, CafeError> {
        let done = sqlx::query("DELETE FROM cafes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    fn row_to_model(row: SqliteRow) -> Result<Cafe, CafeError> {
        Ok(Cafe {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            coffee: row.try_get("coffee")?,
            wifi: row.try_get("wifi")?,
            socket: row.try_get("socket")?,
            location: row.try_get("location")?,
        })
    }
}
