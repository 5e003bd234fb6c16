use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid page: {page} (valid range 1..={total_pages})")]
    InvalidPage { page: u32, total_pages: u32 },
}
