
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Installs a `tracing` subscriber for the test binary. Filtering follows `RUST_LOG`, so
/// `RUST_LOG=ordered_tree=trace` shows which deletion case each test hits.
pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
        {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}
