//! Domain logic for the movies catalog API.
//!
//! Pure types and functions only: ID/timestamp aliases, the domain error
//! enum, and page slicing. No I/O, no web-framework or database types, so
//! everything here is unit-testable without a running server.

pub mod error;
pub mod pagination;
pub mod types;
