//! Logging setup for applications embedding geonav-rs.

/// Installs `env_logger` as the global logger, configured from `RUST_LOG`.
///
/// Library crates only emit through the `log` facade; call this once from the
/// application. Later calls, or calls after another logger was installed, are
/// no-ops.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("env_logger initialized");
    }
}
