//! Request extractors with JSON error bodies.

mod json;
mod path;
pub use json::JsonBody;
pub use path::{SupplierIdPath, INVALID_ID};
