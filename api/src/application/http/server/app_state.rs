use std::sync::Arc;

use drfoodie_core::{application::DrFoodieService, domain::session::SessionState};
use tokio::sync::RwLock;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DrFoodieService,
    /// Single in-memory session shared by all handlers. Never persisted;
    /// guarded by a lock that is not held across remote calls.
    pub session: Arc<RwLock<SessionState>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DrFoodieService) -> Self {
        Self {
            args,
            service,
            session: Arc::new(RwLock::new(SessionState::new())),
        }
    }
}
