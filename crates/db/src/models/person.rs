use serde::Serialize;
use sqlx::FromRow;

use movies_core::types::{DbId, Timestamp};

/// A person row from the `person` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub full_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
