//! Application state shared across all handlers.

use std::sync::Arc;

use securelink_auth::JwtDecoder;
use securelink_core::config::AppConfig;
use securelink_service::link::LinkService;
use securelink_service::resolve::ResolveService;
use securelink_store::LinkStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Owner management surface.
    pub link_service: Arc<LinkService>,
    /// Public resolution surface.
    pub resolve_service: Arc<ResolveService>,
}

impl AppState {
    /// Wires the full dependency graph over a link store. The services
    /// own the store references from here on.
    pub fn new(config: AppConfig, store: Arc<dyn LinkStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let link_service = Arc::new(LinkService::new(Arc::clone(&store)));
        let resolve_service = Arc::new(ResolveService::new(store));

        Self {
            config: Arc::new(config),
            jwt_decoder,
            link_service,
            resolve_service,
        }
    }
}
