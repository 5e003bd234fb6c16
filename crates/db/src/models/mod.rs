//! Row models and API projections for the catalog tables.

pub mod film_work;
pub mod genre;
pub mod person;
