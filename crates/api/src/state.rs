use std::sync::Arc;

use lioncash_content::ContentCatalog;
use lioncash_db::store::FormStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind `Arc`. The catalog is loaded
/// once at startup and read-only thereafter; the store is whichever
/// [`FormStore`] backend the deployment selected.
#[derive(Clone)]
pub struct AppState {
    /// All loaded content sources.
    pub catalog: Arc<ContentCatalog>,
    /// Form-submission storage backend.
    pub store: Arc<dyn FormStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
