//! Backend-agnostic structured logging facade.
//!
//! Application code depends on [`Logger`] only. A concrete logging backend is
//! plugged in by implementing [`LogSink`] and handing it to [`Logger::new`].
//!
//! You are likely to be interested in the sibling crates:
//! * `zerologr-backend`: A leveled, contextual JSON logger.
//! * `zerologr`: The [`LogSink`] adapter for `zerologr-backend`.

mod logger;
mod sink;
mod value;

pub use logger::Logger;
pub use sink::{LogSink, RuntimeInfo};
pub use value::{Value, value};

/// Builds a key-value argument list from heterogeneous expressions.
///
/// ```
/// use zerologr_facade::kv;
///
/// let args = kv!["user", "alice", "attempts", 3, "admin", false];
/// assert_eq!(args.len(), 6);
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::value(&$arg)),+]
    };
}
