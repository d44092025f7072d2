use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted cafe entry. Rating columns hold the display strings of the
/// closed rating scales; see `types::rating`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub coffee: String,
    pub wifi: String,
    pub socket: String,
    pub location: String,
}
