use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::{Event, Field, Level, LevelWriter};

/// An immutable, cheaply clonable structured logger.
#[derive(Clone)]
pub struct Logger {
    writer: Option<Arc<dyn LevelWriter>>,
    level: Level,
    context: Arc<[Field]>,
    timestamp: bool,
}

impl Logger {
    /// A logger writing everything from [`Level::TRACE`] up to `writer`.
    pub fn new(writer: impl LevelWriter + 'static) -> Self {
        Self::from_shared(Arc::new(writer))
    }

    /// A logger writing to a writer shared with other loggers.
    pub fn from_shared(writer: Arc<dyn LevelWriter>) -> Self {
        Self {
            writer: Some(writer),
            level: Level::TRACE,
            context: Arc::from(Vec::new()),
            timestamp: false,
        }
    }

    /// A logger that never writes.
    pub fn nop() -> Self {
        Self {
            writer: None,
            level: Level::DISABLED,
            context: Arc::from(Vec::new()),
            timestamp: false,
        }
    }

    /// A copy of this logger with minimum level `level`.
    pub fn level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// The minimum level this logger writes.
    pub fn get_level(&self) -> Level {
        self.level
    }

    /// Starts deriving a logger with additional persistent context.
    pub fn with(&self) -> Context {
        Context {
            logger: self.clone(),
            fields: self.context.to_vec(),
        }
    }

    /// Starts an event at an arbitrary level.
    pub fn with_level(&self, level: Level) -> Event<'_> {
        if self.should(level) {
            Event::new(self, level)
        } else {
            Event::disabled()
        }
    }

    pub fn trace(&self) -> Event<'_> {
        self.with_level(Level::TRACE)
    }

    pub fn debug(&self) -> Event<'_> {
        self.with_level(Level::DEBUG)
    }

    pub fn info(&self) -> Event<'_> {
        self.with_level(Level::INFO)
    }

    pub fn warn(&self) -> Event<'_> {
        self.with_level(Level::WARN)
    }

    pub fn error(&self) -> Event<'_> {
        self.with_level(Level::ERROR)
    }

    /// An error-level event carrying `err`, or an info-level event when there
    /// is no error.
    pub fn err(&self, err: Option<&(dyn Error + 'static)>) -> Event<'_> {
        match err {
            Some(err) => self.error().err(Some(err)),
            None => self.info(),
        }
    }

    fn should(&self, level: Level) -> bool {
        self.writer.is_some()
            && self.level != Level::DISABLED
            && level != Level::DISABLED
            && level >= self.level
    }

    pub(crate) fn writer(&self) -> Option<&Arc<dyn LevelWriter>> {
        self.writer.as_ref()
    }

    pub(crate) fn context(&self) -> &[Field] {
        &self.context
    }

    pub(crate) fn has_timestamp(&self) -> bool {
        self.timestamp
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("context", &self.context)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

/// Builder for a logger with more persistent context. See [`Logger::with`].
#[must_use = "call `logger` to finish the derived logger"]
pub struct Context {
    logger: Logger,
    fields: Vec<Field>,
}

impl Context {
    /// Adds a field carried by every event of the derived logger.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.push(Field::new(key, value));
        self
    }

    /// Stamps every event of the derived logger with the current time.
    pub fn timestamp(mut self) -> Self {
        self.logger.timestamp = true;
        self
    }

    pub fn logger(self) -> Logger {
        Logger {
            context: Arc::from(self.fields),
            ..self.logger
        }
    }
}
