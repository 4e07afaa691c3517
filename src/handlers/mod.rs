//! HTTP handlers for supplier CRUD.

pub mod supplier;
pub use supplier::*;
