use std::error::Error;
use std::sync::Arc;

use zerologr_backend::{Level, Logger};
use zerologr_facade::{LogSink, RuntimeInfo, Value};

use crate::pairs::{add_to_context, add_to_event};
use crate::{ValidationError, build_pairs, to_backend_level};

/// A [`LogSink`] writing through a backend [`Logger`].
///
/// Malformed key-value lists are never reported to the caller. Instead the
/// sink writes a single error record, `unable to log message`, describing the
/// problem, and drops the original message.
#[derive(Debug, Clone)]
pub struct ZeroSink {
    logger: Logger,
}

impl ZeroSink {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The backend logger this sink writes through.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn report(&self, err: &ValidationError) {
        let err: &(dyn Error + 'static) = err;
        self.logger.err(Some(err)).msg("unable to log message");
    }
}

impl LogSink for ZeroSink {
    fn init(&mut self, _info: RuntimeInfo) {}

    fn enabled(&self, level: i32) -> bool {
        to_backend_level(level) >= self.logger.get_level()
    }

    fn info(&self, level: i32, msg: &str, keys_and_values: &[Value]) {
        let pairs = match build_pairs(keys_and_values) {
            Ok(pairs) => pairs,
            Err(e) => return self.report(&e),
        };
        add_to_event(self.logger.with_level(to_backend_level(level)), pairs).msg(msg);
    }

    fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, keys_and_values: &[Value]) {
        if self.logger.get_level() > Level::ERROR {
            return;
        }
        let pairs = match build_pairs(keys_and_values) {
            Ok(pairs) => pairs,
            Err(e) => return self.report(&e),
        };
        add_to_event(self.logger.error().err(err), pairs).msg(msg);
    }

    // The backend has no notion of a logger name, so the name is dropped.
    fn with_name(self: Arc<Self>, _name: &str) -> Arc<dyn LogSink> {
        Arc::new(Self::new(self.logger.with().logger()))
    }

    fn with_values(self: Arc<Self>, keys_and_values: &[Value]) -> Arc<dyn LogSink> {
        match build_pairs(keys_and_values) {
            Ok(pairs) => Arc::new(Self::new(
                add_to_context(self.logger.with(), pairs).logger(),
            )),
            Err(e) => {
                self.report(&e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zerologr_backend::writer::MemoryWriter;
    use zerologr_facade::kv;

    fn setup(level: Level) -> (Arc<ZeroSink>, MemoryWriter) {
        let out = MemoryWriter::new();
        (Arc::new(ZeroSink::new(Logger::new(out.clone()).level(level))), out)
    }

    fn fallback(reason: &str) -> serde_json::Value {
        json!({"level": "error", "error": reason, "message": "unable to log message"})
    }

    #[test]
    fn info_writes_translated_level_and_pairs() {
        let (sink, out) = setup(Level::TRACE);
        sink.info(0, "hello", &kv!["val1", 1, "val2", json!({"k": 1})]);
        sink.info(1, "debugging", &[]);
        sink.info(3, "very verbose", &[]);
        assert_eq!(
            out.records(),
            vec![
                json!({"level": "info", "val1": 1, "val2": {"k": 1}, "message": "hello"}),
                json!({"level": "debug", "message": "debugging"}),
            ]
        );
    }

    #[test]
    fn info_with_bad_pairs_writes_fallback_only() {
        let (sink, out) = setup(Level::TRACE);
        sink.info(0, "lost", &kv!["k1", 1, "bad"]);
        sink.info(0, "lost too", &kv![7, 1]);
        assert_eq!(
            out.records(),
            vec![
                fallback("odd number of arguments passed as key-value pairs for logging"),
                fallback("non-string key argument passed to logging: 7"),
            ]
        );
    }

    #[test]
    fn enabled_compares_against_minimum() {
        let (sink, _) = setup(Level::DEBUG);
        assert!(sink.enabled(0));
        assert!(sink.enabled(1));
        assert!(!sink.enabled(2));

        let (sink, _) = setup(Level::INFO);
        assert!(sink.enabled(0));
        assert!(!sink.enabled(1));
    }

    #[test]
    fn error_attaches_error_value() {
        let (sink, out) = setup(Level::DEBUG);
        let e = std::io::Error::other("an error occurred");
        sink.error(Some(&e), "goodbye", &kv!["code", -1]);
        sink.error(None, "uh oh", &kv!["trouble", true]);
        assert_eq!(
            out.lines(),
            vec![
                r#"{"level":"error","error":"an error occurred","code":-1,"message":"goodbye"}"#,
                r#"{"level":"error","trouble":true,"message":"uh oh"}"#,
            ]
        );
    }

    #[test]
    fn error_is_skipped_above_error_level() {
        let (sink, out) = setup(Level::FATAL);
        sink.error(None, "suppressed", &[]);
        sink.error(None, "not even validated", &kv!["odd"]);
        assert!(out.is_empty());
    }

    #[test]
    fn error_with_bad_pairs_writes_fallback_only() {
        let (sink, out) = setup(Level::ERROR);
        let e = std::io::Error::other("real problem");
        sink.error(Some(&e), "lost", &kv![true, 1]);
        assert_eq!(
            out.records(),
            vec![fallback("non-string key argument passed to logging: true")]
        );
    }

    #[test]
    fn with_values_derives_without_touching_receiver() {
        let (root, out) = setup(Level::TRACE);
        let child = root.clone().with_values(&kv!["a", 1]);
        child.info(0, "child", &[]);
        root.info(0, "root", &[]);
        assert_eq!(
            out.records(),
            vec![
                json!({"level": "info", "a": 1, "message": "child"}),
                json!({"level": "info", "message": "root"}),
            ]
        );
    }

    #[test]
    fn with_values_failure_returns_receiver() {
        let (root, out) = setup(Level::TRACE);
        let as_dyn: Arc<dyn LogSink> = root.clone();
        let same = root.clone().with_values(&kv!["k1", 1, "bad"]);
        assert!(Arc::ptr_eq(&same, &as_dyn));
        same.info(0, "after", &[]);
        assert_eq!(
            out.records(),
            vec![
                fallback("odd number of arguments passed as key-value pairs for logging"),
                json!({"level": "info", "message": "after"}),
            ]
        );
    }

    #[test]
    fn with_name_is_dropped() {
        let (root, out) = setup(Level::TRACE);
        let named = root.clone().with_values(&kv!["k", "v"]).with_name("foo");
        named.info(0, "named", &[]);
        assert_eq!(out.lines(), vec![r#"{"level":"info","k":"v","message":"named"}"#]);
    }
}
