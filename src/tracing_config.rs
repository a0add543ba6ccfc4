use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the tools.
///
/// Uses the `RUST_LOG` environment variable if set; otherwise defaults to
/// "info", or "debug" when `verbose` is passed. Output format switches
/// between pretty console output and JSON based on `PDMTOOLS_LOG_FORMAT`.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let format = env::var("PDMTOOLS_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_target(true).with_level(true))
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()?;
        }
    }

    Ok(())
}
