//! Read-only repository for the `film_work` table and its joins.

use sqlx::PgPool;

use movies_core::types::DbId;

use crate::models::film_work::{FilmWithRelations, Role};

/// Aggregated projection shared by the list and detail queries.
///
/// One grouped pass from `film_work` through both join tables. Genres
/// aggregate every linked genre name; people aggregate three times, each
/// aggregation filtered by an exact role match *before* grouping, so a
/// person holding two roles on one film lands in both lists and never
/// leaks across roles. `DISTINCT` inside the aggregates absorbs the row
/// multiplication between the genre and person join branches, and
/// `COALESCE` turns absent links into empty arrays instead of NULL.
const AGGREGATED_COLUMNS: &str = "\
    fw.id,
    fw.title,
    fw.description,
    fw.creation_date,
    fw.rating,
    fw.type,
    COALESCE(ARRAY_AGG(DISTINCT g.name) FILTER (WHERE g.id IS NOT NULL), '{}') AS genres,
    COALESCE(ARRAY_AGG(DISTINCT p.full_name) FILTER (WHERE pfw.role = $1), '{}') AS actors,
    COALESCE(ARRAY_AGG(DISTINCT p.full_name) FILTER (WHERE pfw.role = $2), '{}') AS directors,
    COALESCE(ARRAY_AGG(DISTINCT p.full_name) FILTER (WHERE pfw.role = $3), '{}') AS writers";

const AGGREGATED_JOINS: &str = "\
    FROM film_work fw
    LEFT JOIN genre_film_work gfw ON gfw.film_work_id = fw.id
    LEFT JOIN genre g ON g.id = gfw.genre_id
    LEFT JOIN person_film_work pfw ON pfw.film_work_id = fw.id
    LEFT JOIN person p ON p.id = pfw.person_id";

/// Provides aggregated read operations for film works.
pub struct FilmWorkRepo;

impl FilmWorkRepo {
    /// Fetch the complete aggregated film list.
    ///
    /// Returns every film with its genre and per-role person name lists.
    /// Films are ordered by `(created_at, id)` so repeated calls against
    /// unchanged data page identically; order *within* the name lists is
    /// unspecified.
    pub async fn list_with_relations(
        pool: &PgPool,
    ) -> Result<Vec<FilmWithRelations>, sqlx::Error> {
        let query = format!(
            "SELECT {AGGREGATED_COLUMNS}
             {AGGREGATED_JOINS}
             GROUP BY fw.id
             ORDER BY fw.created_at, fw.id"
        );
        sqlx::query_as::<_, FilmWithRelations>(&query)
            .bind(Role::Actor.as_str())
            .bind(Role::Director.as_str())
            .bind(Role::Writer.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one film by ID with the same aggregated projection as the
    /// list. Returns `None` if no film with that ID exists.
    pub async fn find_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FilmWithRelations>, sqlx::Error> {
        let query = format!(
            "SELECT {AGGREGATED_COLUMNS}
             {AGGREGATED_JOINS}
             WHERE fw.id = $4
             GROUP BY fw.id"
        );
        sqlx::query_as::<_, FilmWithRelations>(&query)
            .bind(Role::Actor.as_str())
            .bind(Role::Director.as_str())
            .bind(Role::Writer.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
