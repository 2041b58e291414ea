//! `zerologr-facade` sink for `zerologr-backend`.
//!
//! This crate lets code written against the backend-agnostic
//! [`zerologr_facade::Logger`] emit its output through a
//! [`zerologr_backend::Logger`].
//!
//! ```
//! use zerologr_backend::{Level, writer::MemoryWriter};
//! use zerologr_facade::kv;
//!
//! let out = MemoryWriter::new();
//! let backend = zerologr_backend::Logger::new(out.clone()).level(Level::DEBUG);
//! let log = zerologr::new_logger(backend);
//!
//! log.info("hello", &kv!["val1", 1]);
//! log.v(1).info("you should see this", &[]);
//! log.v(2).info("you should NOT see this", &[]);
//!
//! assert_eq!(out.len(), 2);
//! ```
//!
//! Facade verbosity `v` becomes backend level `1 - v`: verbosity 0 logs at
//! info, 1 at debug, 2 at trace, and higher verbosities at increasingly
//! verbose custom levels.

mod error;
mod level;
mod pairs;
mod sink;

pub use error::ValidationError;
pub use level::to_backend_level;
pub use pairs::{KeyValue, build_pairs};
pub use sink::ZeroSink;

/// Creates a facade logger writing through `logger`.
pub fn new_logger(logger: zerologr_backend::Logger) -> zerologr_facade::Logger {
    zerologr_facade::Logger::new(ZeroSink::new(logger))
}
