//! Diagnostic logging to stderr. User-facing output goes through
//! `ui::messages` instead.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `warn`, or `debug` for this crate with `--verbose`.
/// `color` off keeps ANSI escapes out of the diagnostics.
pub fn init(verbose: bool, color: bool) {
    let default = if verbose {
        "warn,rtripplanner=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init();
}
