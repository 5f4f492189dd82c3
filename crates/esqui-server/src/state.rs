use std::sync::Arc;

use chrono::{DateTime, Local};
use esqui_core::ResortCatalog;
use esqui_scraper::ResortClient;
use tokio::sync::RwLock;

/// Completion time of the most recent batch extraction, shared by every
/// handler through [`AppState`]. Overwritten by each batch; read by `/status`.
#[derive(Debug, Clone, Default)]
pub struct LastUpdated(Arc<RwLock<Option<DateTime<Local>>>>);

impl LastUpdated {
    pub async fn get(&self) -> Option<DateTime<Local>> {
        *self.0.read().await
    }

    /// Records `Local::now()` and returns it.
    pub async fn touch(&self) -> DateTime<Local> {
        let now = Local::now();
        *self.0.write().await = Some(now);
        now
    }
}

#[derive(Clone)]
pub struct AppState {
    pub client: ResortClient,
    pub catalog: Arc<ResortCatalog>,
    pub last_updated: LastUpdated,
}

impl AppState {
    pub fn new(client: ResortClient, catalog: Arc<ResortCatalog>) -> Self {
        Self {
            client,
            catalog,
            last_updated: LastUpdated::default(),
        }
    }
}
