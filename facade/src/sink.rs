use std::error::Error;
use std::sync::Arc;

use crate::Value;

/// Runtime metadata handed to a sink when a [`crate::Logger`] is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Number of call frames between application code and the sink.
    pub call_depth: usize,
}

/// The capability set a logging backend provides to the facade.
///
/// Verbosity levels are facade levels: 0 is informational, larger values are
/// more verbose. Implementations must be safe to share across threads, and
/// derivation must never modify the receiver.
pub trait LogSink: Send + Sync {
    /// Receives runtime information once, before the sink is shared.
    fn init(&mut self, info: RuntimeInfo);

    /// Whether a message at `level` would be emitted.
    fn enabled(&self, level: i32) -> bool;

    /// Logs a non-error message at `level` with key-value pairs.
    fn info(&self, level: i32, msg: &str, keys_and_values: &[Value]);

    /// Logs an error, with an optional causing error value.
    fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, keys_and_values: &[Value]);

    /// Derives a sink with an added name segment.
    fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink>;

    /// Derives a sink carrying additional key-value pairs on every message.
    fn with_values(self: Arc<Self>, keys_and_values: &[Value]) -> Arc<dyn LogSink>;
}
