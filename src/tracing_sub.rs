//! Tracing setup. The TUI owns the terminal, so log output goes to a file
//! when one is given and is discarded otherwise; writing to stderr would
//! corrupt the alternate screen.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Safe to call more than once; only the first call installs the global
/// subscriber.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    match log_file {
        Some(path) => {
            let file = Arc::new(File::create(path)?);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}
