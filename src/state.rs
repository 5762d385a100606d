use std::sync::Arc;

use crate::store::GrievanceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GrievanceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn GrievanceStore>) -> Self {
        Self { store }
    }
}
