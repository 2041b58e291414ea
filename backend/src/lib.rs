//! A leveled, contextual structured logger in the style of zerolog.
//!
//! A [`Logger`] is an immutable value holding a writer, a minimum [`Level`] and
//! a list of persistent context fields. Records are built with an [`Event`]
//! and finished with [`Event::msg`]; loggers with more context are derived
//! with [`Logger::with`].
//!
//! ```
//! use zerologr_backend::{Level, Logger, writer::MemoryWriter};
//!
//! let out = MemoryWriter::new();
//! let logger = Logger::new(out.clone())
//!     .level(Level::INFO)
//!     .with()
//!     .field("service", "billing")
//!     .logger();
//!
//! logger.info().field("attempt", 2).msg("charging card");
//! logger.debug().msg("not written");
//!
//! assert_eq!(out.records().len(), 1);
//! ```
//!
//! [`bridge::LogBridge`] routes records from the [`log`](https://docs.rs/log)
//! crate into a [`Logger`].

pub mod bridge;
mod event;
mod level;
mod logger;
mod record;
pub mod writer;

pub use event::Event;
pub use level::{Level, ParseLevelError};
pub use logger::{Context, Logger};
pub use record::{Field, Record};
pub use writer::LevelWriter;

/// Field name carrying the level of a record.
pub const LEVEL_FIELD: &str = "level";
/// Field name carrying the timestamp of a record.
pub const TIME_FIELD: &str = "time";
/// Field name carrying the message of a record.
pub const MESSAGE_FIELD: &str = "message";
/// Field name carrying an attached error.
pub const ERROR_FIELD: &str = "error";
