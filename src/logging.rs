use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;

/// Route the `log` facade to a file under the data directory. The terminal
/// owns stdout/stderr while the TUI runs, so file logging is the only sink.
/// Keep the returned handle alive for the life of the process.
pub fn init(log_dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("creating {}", log_dir.display()))?;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("daykeeper"),
        )
        .append()
        .start()?;

    info!("daykeeper {} starting", env!("CARGO_PKG_VERSION"));
    Ok(handle)
}
