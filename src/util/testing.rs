//! Shared tracing setup for unit and integration tests.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{filter::filter_fn, fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Default filter when `RUST_LOG` is unset: this crate's debug events only.
const DEFAULT_FILTER: &str = "treasure_chest=debug";

/// Install the test logging subscriber once per process.
///
/// Honors `RUST_LOG`. A subscriber installed elsewhere is left in place.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        install_subscriber();
        info!("test logging ready");
    });
}

fn install_subscriber() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    // config logs its source collection at debug
    let quiet_config = filter_fn(|metadata| !metadata.target().starts_with("config"));
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(quiet_config)
        .with_filter(env_filter);

    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        eprintln!("test logging not installed: {e}");
    }
}
