//! SupplierService: business rules between handlers and the store.

mod supplier;
mod validation;
pub use supplier::{SupplierService, DEFAULT_READ_TIMEOUT};
pub use validation::RequestValidator;
