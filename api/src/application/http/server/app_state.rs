use std::sync::Arc;

use calorielens_core::application::CalorieLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<CalorieLensService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CalorieLensService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
