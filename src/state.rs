//! Shared state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ConversionService;

#[derive(Clone)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
}

impl AppState {
    pub fn new(conversion_service: Arc<ConversionService>) -> Self {
        Self { conversion_service }
    }
}
