//! Handlers for the `/movies` resource.
//!
//! Two independent handlers sharing the aggregation repository and the
//! pure pagination function; neither carries any per-request state.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use movies_core::error::CoreError;
use movies_core::pagination::{paginate, Page};
use movies_core::types::DbId;
use movies_db::models::film_work::FilmWithRelations;
use movies_db::repositories::FilmWorkRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the list endpoint (`?page=<int>`).
///
/// Page size is configuration, never a request parameter.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    /// 1-based page number; defaults to the first page.
    pub page: Option<u32>,
}

/// GET /api/v1/movies
///
/// Materializes the full aggregated film list, then slices the requested
/// page out of it. Out-of-range pages are rejected with 400, not clamped.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Page<FilmWithRelations>>> {
    let films = FilmWorkRepo::list_with_relations(&state.pool).await?;
    let page = paginate(
        films,
        params.page.unwrap_or(1),
        state.config.movies_per_page,
    )?;
    Ok(Json(page))
}

/// GET /api/v1/movies/{id}
///
/// Returns the single aggregated film record, without a pagination
/// envelope, or 404 if the ID matches no film.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FilmWithRelations>> {
    let film = FilmWorkRepo::find_with_relations(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "film_work",
            id,
        })?;
    Ok(Json(film))
}
