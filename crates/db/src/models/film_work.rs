//! Film work rows and the aggregated API projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use movies_core::types::{DbId, Timestamp};

/// Kind tag on a film work. Stored as TEXT with a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FilmType {
    Movie,
    TvShow,
}

/// Role a person holds on a film. One person may hold several roles on the
/// same film; each (film, person, role) triple is unique.
///
/// Role values are compared exactly (no case folding) when aggregating, so
/// the stored strings are the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Actor,
    Director,
    Writer,
}

impl Role {
    /// The stored wire form, bound as a query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Actor => "actor",
            Role::Director => "director",
            Role::Writer => "writer",
        }
    }
}

/// A bare film work row from the `film_work` table.
///
/// `file_path` stays out of this struct on purpose: it belongs to the admin
/// side and the API never projects it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmWork {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub creation_date: Timestamp,
    pub rating: Option<f64>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub film_type: FilmType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The aggregated projection served by the movies endpoints: scalar film
/// fields plus deduplicated genre and per-role person name lists.
///
/// The name lists decode from PostgreSQL `text[]` aggregates. Order within
/// each list is unspecified; callers must treat them as sets.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmWithRelations {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub creation_date: Timestamp,
    pub rating: Option<f64>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub film_type: FilmType,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}
