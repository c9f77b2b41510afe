//! Logging initialisation for host applications

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Safe to call more than once; only the first call takes effect. The filter
/// honours `RUST_LOG`, defaulting to `info` for the roster crates.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,roster_core=info,roster_infra=info"));

        // try_init: the host may already have a subscriber installed.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
