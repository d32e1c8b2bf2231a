//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; `log_level` is the fallback directive.
/// `log_format` is `json` for structured output, anything else for text.
/// Logs go to stderr so they never mix with command output.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {e}");
    }
}
