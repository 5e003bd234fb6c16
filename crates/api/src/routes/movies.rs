//! Route definitions for the movies resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /        -> list (paginated, ?page=<int>)
/// GET /{id}    -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list))
        .route("/{id}", get(movies::detail))
}
