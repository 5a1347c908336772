use std::sync::Arc;

use campusbot_actions::{default_registry, ActionRegistry};
use campusbot_core::config::AppConfig;
use campusbot_portal::PortalClient;
use tracing::info;

/// Everything the running server holds onto. The registry is shared with
/// the webhook router; the config stays here for the serve loop.
pub struct Application {
    pub config: AppConfig,
    pub registry: Arc<ActionRegistry>,
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    let client = PortalClient::new(&config.portal);
    let registry = Arc::new(default_registry(client));

    info!(
        event_name = "system.bootstrap.complete",
        correlation_id = "bootstrap",
        portal_base_url = %config.portal.base_url,
        actions = registry.len(),
        "action registry assembled"
    );

    Application { config, registry }
}
