//! Routes records from the [`log`](https://docs.rs/log) crate into a [`Logger`].
//!
//! Libraries across the ecosystem log through `log`. Installing a
//! [`LogBridge`] makes those records come out of the same writer, with the
//! same context, as everything else.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_boxed_logger, set_max_level};
use thiserror::Error;

use crate::{Level, Logger};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to install log bridge: {cause}")]
    Install { cause: SetLoggerError },
}

/// A [`log::Log`] implementation writing through a [`Logger`].
///
/// Records carry a `module` field with the module path and a `caller` field
/// with `file:line` when `log` provides them.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Installs a bridge to `logger` as the process-wide `log` logger.
    ///
    /// Only one `log` logger can ever be installed; later calls fail.
    pub fn init(logger: Logger, max_level: LevelFilter) -> Result<(), BridgeError> {
        set_boxed_logger(Box::new(Self::new(logger)))
            .map_err(|cause| BridgeError::Install { cause })?;
        set_max_level(max_level);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger
            .with_level(Level::from(metadata.level()))
            .enabled()
    }

    fn log(&self, record: &Record<'_>) {
        let mut event = self.logger.with_level(Level::from(record.level()));
        if !event.enabled() {
            return;
        }
        if let Some(module) = record.module_path() {
            event = event.field("module", module);
        }
        if let Some(file) = record.file() {
            let line = record.line().unwrap_or(0);
            event = event.field("caller", format!("{file}:{line}"));
        }
        event.msg(&record.args().to_string());
    }

    fn flush(&self) {}
}
