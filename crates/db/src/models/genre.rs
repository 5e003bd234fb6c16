use serde::Serialize;
use sqlx::FromRow;

use movies_core::types::{DbId, Timestamp};

/// A genre row from the `genre` table. `name` is non-empty (CHECK
/// constraint).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
