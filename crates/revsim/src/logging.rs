use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr, or to a file when `log_file` is given.
///
/// The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable. File output is appended, without ANSI
/// colors.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("revsim={level},revsim_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_names(true),
                )
                .try_init()?;

            tracing::info!(log_path = %path.display(), "Logging initialized");
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_names(true),
                )
                .try_init()?;
        }
    }

    Ok(())
}
