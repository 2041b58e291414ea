use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::{LogSink, RuntimeInfo, Value};

/// The handle application code logs through.
///
/// A `Logger` is cheap to clone and never changes once built; [`Logger::v`],
/// [`Logger::with_values`] and [`Logger::with_name`] all return new loggers.
#[derive(Clone)]
pub struct Logger {
    sink: Option<Arc<dyn LogSink>>,
    level: i32,
}

impl Logger {
    /// Creates a logger backed by `sink`, initializing the sink first.
    pub fn new(mut sink: impl LogSink + 'static) -> Self {
        sink.init(RuntimeInfo { call_depth: 1 });
        Self {
            sink: Some(Arc::new(sink)),
            level: 0,
        }
    }

    /// A logger that drops everything.
    pub fn discard() -> Self {
        Self {
            sink: None,
            level: 0,
        }
    }

    /// Returns a logger for less important messages.
    ///
    /// Increments are cumulative, so `log.v(1).v(1)` logs at verbosity 2.
    /// Negative increments are treated as 0.
    pub fn v(&self, level: i32) -> Self {
        Self {
            sink: self.sink.clone(),
            level: self.level.saturating_add(level.max(0)),
        }
    }

    /// The verbosity this logger emits at.
    pub fn verbosity(&self) -> i32 {
        self.level
    }

    /// Whether messages from [`Logger::info`] would be emitted.
    pub fn enabled(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| sink.enabled(self.level))
    }

    /// Logs a non-error message with key-value pairs.
    pub fn info(&self, msg: &str, keys_and_values: &[Value]) {
        if let Some(sink) = &self.sink {
            if sink.enabled(self.level) {
                sink.info(self.level, msg, keys_and_values);
            }
        }
    }

    /// Logs an error. Errors are not subject to verbosity.
    pub fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, keys_and_values: &[Value]) {
        if let Some(sink) = &self.sink {
            sink.error(err, msg, keys_and_values);
        }
    }

    /// Returns a logger whose messages all carry `keys_and_values`.
    pub fn with_values(&self, keys_and_values: &[Value]) -> Self {
        Self {
            sink: self
                .sink
                .clone()
                .map(|sink| sink.with_values(keys_and_values)),
            level: self.level,
        }
    }

    /// Returns a logger with `name` appended to its name.
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            sink: self.sink.clone().map(|sink| sink.with_name(name)),
            level: self.level,
        }
    }

    /// The sink behind this logger, if any.
    pub fn sink(&self) -> Option<&Arc<dyn LogSink>> {
        self.sink.as_ref()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.sink.is_some())
            .field("level", &self.level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Init(RuntimeInfo),
        Info(i32, String, Vec<Value>),
        Error(Option<String>, String, Vec<Value>),
        WithName(String),
        WithValues(Vec<Value>),
    }

    struct RecordingSink {
        calls: Arc<Mutex<Vec<Call>>>,
        max_level: i32,
    }

    impl RecordingSink {
        fn new(max_level: i32) -> (Self, Arc<Mutex<Vec<Call>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    calls: calls.clone(),
                    max_level,
                },
                calls,
            )
        }

        fn push(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl LogSink for RecordingSink {
        fn init(&mut self, info: RuntimeInfo) {
            self.push(Call::Init(info));
        }

        fn enabled(&self, level: i32) -> bool {
            level <= self.max_level
        }

        fn info(&self, level: i32, msg: &str, keys_and_values: &[Value]) {
            self.push(Call::Info(level, msg.to_string(), keys_and_values.to_vec()));
        }

        fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, keys_and_values: &[Value]) {
            self.push(Call::Error(
                err.map(|e| e.to_string()),
                msg.to_string(),
                keys_and_values.to_vec(),
            ));
        }

        fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink> {
            self.push(Call::WithName(name.to_string()));
            self
        }

        fn with_values(self: Arc<Self>, keys_and_values: &[Value]) -> Arc<dyn LogSink> {
            self.push(Call::WithValues(keys_and_values.to_vec()));
            self
        }
    }

    #[test]
    fn new_initializes_sink_once() {
        let (sink, calls) = RecordingSink::new(0);
        let _logger = Logger::new(sink);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![Call::Init(RuntimeInfo { call_depth: 1 })]
        );
    }

    #[test]
    fn info_is_gated_by_verbosity() {
        let (sink, calls) = RecordingSink::new(1);
        let logger = Logger::new(sink);
        logger.info("zero", &kv!["a", 1]);
        logger.v(1).info("one", &[]);
        logger.v(1).v(1).info("two", &[]);

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[1..],
            [
                Call::Info(0, "zero".to_string(), kv!["a", 1]),
                Call::Info(1, "one".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn error_ignores_verbosity() {
        let (sink, calls) = RecordingSink::new(0);
        let logger = Logger::new(sink).v(5);
        let err = std::io::Error::other("boom");
        logger.error(Some(&err), "failed", &kv!["code", -1]);
        logger.error(None, "uh oh", &[]);

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[1..],
            [
                Call::Error(Some("boom".to_string()), "failed".to_string(), kv!["code", -1]),
                Call::Error(None, "uh oh".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn v_accumulates_and_ignores_negative() {
        let logger = Logger::discard();
        assert_eq!(logger.v(2).v(3).verbosity(), 5);
        assert_eq!(logger.v(-4).verbosity(), 0);
        assert_eq!(logger.v(i32::MAX).v(1).verbosity(), i32::MAX);
    }

    #[test]
    fn derivation_keeps_verbosity() {
        let (sink, calls) = RecordingSink::new(10);
        let logger = Logger::new(sink).v(2);
        let derived = logger.with_values(&kv!["k", "v"]).with_name("child");
        assert_eq!(derived.verbosity(), 2);
        assert!(derived.enabled());

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[1..],
            [
                Call::WithValues(kv!["k", "v"]),
                Call::WithName("child".to_string()),
            ]
        );
    }

    #[test]
    fn discard_is_silent() {
        let logger = Logger::discard();
        assert!(!logger.enabled());
        assert!(logger.sink().is_none());
        logger.info("nothing", &kv!["a", 1]);
        logger.error(None, "nothing", &[]);
        assert!(logger.with_values(&kv!["a", 1]).sink().is_none());
    }
}
