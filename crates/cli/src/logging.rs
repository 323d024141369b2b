// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either, only
/// warnings and errors are shown. Engine records emitted through `log` are
/// forwarded by the subscriber's log bridge.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // A second initialisation (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
