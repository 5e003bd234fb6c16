//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod film_work_repo;

pub use film_work_repo::FilmWorkRepo;
