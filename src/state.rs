//! Shared application state for all routes.

use crate::service::SupplierService;

#[derive(Clone)]
pub struct AppState {
    pub suppliers: SupplierService,
}

impl AppState {
    pub fn new(suppliers: SupplierService) -> Self {
        AppState { suppliers }
    }
}
