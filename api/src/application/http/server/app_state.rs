use std::sync::Arc;

use safemenu_core::application::SafeMenuService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SafeMenuService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SafeMenuService) -> Self {
        Self { args, service }
    }
}
