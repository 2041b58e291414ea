use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a record. Larger is more severe.
///
/// The named constants cover the usual levels, but any `i8` is a valid level:
/// values below [`Level::TRACE`] are increasingly verbose custom levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i8);

impl Level {
    pub const TRACE: Level = Level(-1);
    pub const DEBUG: Level = Level(0);
    pub const INFO: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const FATAL: Level = Level(4);
    pub const PANIC: Level = Level(5);
    /// Records at this level carry no `level` field.
    pub const NO_LEVEL: Level = Level(6);
    /// As a minimum level, turns the logger off.
    pub const DISABLED: Level = Level(7);

    pub const fn new(level: i8) -> Self {
        Self(level)
    }

    pub const fn as_i8(self) -> i8 {
        self.0
    }

    /// Three letter form used by the console writer.
    pub fn abbreviation(self) -> String {
        match self {
            Level::TRACE => "TRC".to_string(),
            Level::DEBUG => "DBG".to_string(),
            Level::INFO => "INF".to_string(),
            Level::WARN => "WRN".to_string(),
            Level::ERROR => "ERR".to_string(),
            Level::FATAL => "FTL".to_string(),
            Level::PANIC => "PNC".to_string(),
            Level::NO_LEVEL => "???".to_string(),
            Level(other) => other.to_string(),
        }
    }
}

impl From<i8> for Level {
    fn from(value: i8) -> Self {
        Self(value)
    }
}

impl From<Level> for i8 {
    fn from(value: Level) -> Self {
        value.0
    }
}

impl From<log::Level> for Level {
    fn from(value: log::Level) -> Self {
        match value {
            log::Level::Error => Level::ERROR,
            log::Level::Warn => Level::WARN,
            log::Level::Info => Level::INFO,
            log::Level::Debug => Level::DEBUG,
            log::Level::Trace => Level::TRACE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Level::TRACE => f.write_str("trace"),
            Level::DEBUG => f.write_str("debug"),
            Level::INFO => f.write_str("info"),
            Level::WARN => f.write_str("warn"),
            Level::ERROR => f.write_str("error"),
            Level::FATAL => f.write_str("fatal"),
            Level::PANIC => f.write_str("panic"),
            Level::NO_LEVEL => Ok(()),
            Level::DISABLED => f.write_str("disabled"),
            Level(other) => write!(f, "{other}"),
        }
    }
}

/// The input named no known level and was not an `i8`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            "fatal" => Ok(Level::FATAL),
            "panic" => Ok(Level::PANIC),
            "disabled" => Ok(Level::DISABLED),
            "" => Ok(Level::NO_LEVEL),
            other => other.parse::<i8>().map(Level).map_err(|_| ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}
