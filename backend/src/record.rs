use serde::ser::{Serialize, SerializeMap, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::{LEVEL_FIELD, Level, MESSAGE_FIELD, TIME_FIELD};

/// A named value on a record or in a logger's context.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: serde_json::Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A finished event, handed to a [`crate::LevelWriter`].
#[derive(Debug)]
pub struct Record<'a> {
    pub level: Level,
    pub time: Option<OffsetDateTime>,
    pub context: &'a [Field],
    pub fields: &'a [Field],
    pub message: &'a str,
}

impl Record<'_> {
    /// Context fields followed by event fields, in insertion order.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.context.iter().chain(self.fields.iter())
    }

    pub fn formatted_time(&self) -> Option<String> {
        self.time
            .map(|t| t.format(&Rfc3339).unwrap_or("<unknown>".to_string()))
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.level != Level::NO_LEVEL {
            map.serialize_entry(LEVEL_FIELD, &self.level.to_string())?;
        }
        if let Some(time) = self.formatted_time() {
            map.serialize_entry(TIME_FIELD, &time)?;
        }
        for field in self.all_fields() {
            map.serialize_entry(&field.key, &field.value)?;
        }
        if !self.message.is_empty() {
            map.serialize_entry(MESSAGE_FIELD, self.message)?;
        }
        map.end()
    }
}
