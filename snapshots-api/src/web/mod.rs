pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::Authenticated;
pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::services::SnapshotService;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub snapshot_service: Arc<SnapshotService>,
}

impl AppState {
    pub fn new(config: Arc<Config>, snapshot_service: Arc<SnapshotService>) -> Self {
        Self {
            config,
            snapshot_service,
        }
    }
}
