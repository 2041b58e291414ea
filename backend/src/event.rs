use std::error::Error;

use time::OffsetDateTime;

use crate::{ERROR_FIELD, Field, Logger, Record};

/// A record under construction.
///
/// An event whose level the logger does not emit is inert: adding fields is
/// a no-op and finishing it writes nothing.
#[must_use = "an event is only written by `msg` or `send`"]
pub struct Event<'a> {
    pending: Option<Pending<'a>>,
}

struct Pending<'a> {
    logger: &'a Logger,
    level: crate::Level,
    fields: Vec<Field>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(logger: &'a Logger, level: crate::Level) -> Self {
        Self {
            pending: Some(Pending {
                logger,
                level,
                fields: Vec::new(),
            }),
        }
    }

    pub(crate) fn disabled() -> Self {
        Self { pending: None }
    }

    /// Whether finishing this event will write a record.
    pub fn enabled(&self) -> bool {
        self.pending.is_some()
    }

    /// Adds a field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            pending.fields.push(Field::new(key, value));
        }
        self
    }

    /// Adds the `error` field. `None` adds nothing.
    pub fn err(self, err: Option<&(dyn Error + 'static)>) -> Self {
        match err {
            Some(err) => self.field(ERROR_FIELD, err.to_string()),
            None => self,
        }
    }

    /// Finishes the event with `message` and writes it.
    pub fn msg(self, message: &str) {
        let Some(pending) = self.pending else {
            return;
        };
        let Some(writer) = pending.logger.writer() else {
            return;
        };
        let record = Record {
            level: pending.level,
            time: pending.logger.has_timestamp().then(OffsetDateTime::now_utc),
            context: pending.logger.context(),
            fields: &pending.fields,
            message,
        };
        if let Err(e) = writer.write_record(&record) {
            eprintln!("zerologr: could not write event: {e}");
        }
    }

    /// Finishes the event without a message.
    pub fn send(self) {
        self.msg("");
    }
}
