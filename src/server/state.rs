use std::sync::Arc;

use crate::features::bfhl::BfhlService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BfhlService>,
    pub official_email: Arc<String>,
}

impl AppState {
    pub fn new(service: Arc<BfhlService>, official_email: String) -> Self {
        Self {
            service,
            official_email: Arc::new(official_email),
        }
    }
}
