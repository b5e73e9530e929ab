//! Logging system initialization
//!
//! Installs a `tracing` fmt subscriber on stderr. The level defaults to WARN
//! and can be changed through `RUST_LOG` (e.g. `RUST_LOG=qr_page=debug`).

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!("qr_page v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
