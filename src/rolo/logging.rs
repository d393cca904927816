//! Log output setup.
//!
//! Logs go to stderr so they never mix with command output on stdout. `RUST_LOG` wins
//! over the configured level when it is set.

use tracing_subscriber::EnvFilter;

pub fn init(level: &str) {
    // A subscriber may already be installed (tests, embedding); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
