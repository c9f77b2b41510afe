//! Application context - dependency injection container

use std::sync::Arc;

use roster_core::{DirectoryService, DirectoryStore};
use roster_domain::{Config, Result};
use roster_infra::RestUserGateway;

/// Application context - holds the wired directory service and its config.
///
/// The hosting UI keeps one context for the whole session; the directory is
/// empty at startup and discarded at process end.
pub struct AppContext {
    pub config: Config,
    pub directory: Arc<DirectoryService>,
}

impl AppContext {
    /// Wire up a context from configuration.
    ///
    /// # Errors
    /// Returns `RosterError::Config` if the remote settings are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let gateway = RestUserGateway::new(&config.remote)?;
        let store = Arc::new(DirectoryStore::new());
        let directory = Arc::new(DirectoryService::new(Arc::new(gateway), store));
        Ok(Self { config, directory })
    }

    /// Wire up a context using whatever configuration source is available
    /// (environment, config file, or defaults).
    pub fn from_env() -> Result<Self> {
        Self::new(roster_infra::config::load()?)
    }
}

#[cfg(test)]
mod tests {
    use roster_domain::config::RemoteConfig;
    use roster_domain::RosterError;

    use super::*;

    #[test]
    fn builds_from_default_config() {
        let ctx = AppContext::new(Config::default()).expect("context");
        assert!(ctx.directory.store().is_empty());
    }

    #[test]
    fn invalid_base_url_is_rejected_at_wiring_time() {
        let config = Config {
            remote: RemoteConfig {
                base_url: "definitely not a url".into(),
                timeout_seconds: None,
                user_agent: None,
            },
        };
        assert!(matches!(AppContext::new(config), Err(RosterError::Config(_))));
    }
}
