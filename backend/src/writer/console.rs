use std::io::{self, Write};
use std::sync::Mutex;

use itertools::Itertools;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use super::{LevelWriter, lock};
use crate::{ERROR_FIELD, Field, Record};

/// How the console writer renders timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// `2006-01-02T15:04:05Z`
    Rfc3339,
    /// `3:04PM`
    #[default]
    Kitchen,
    /// Seconds since the epoch.
    Unix,
    /// Milliseconds since the epoch.
    UnixMs,
}

impl TimeFormat {
    fn render(self, time: OffsetDateTime) -> String {
        match self {
            TimeFormat::Rfc3339 => time.format(&Rfc3339).unwrap_or("<unknown>".to_string()),
            TimeFormat::Kitchen => time
                .format(format_description!(
                    "[hour repr:12 padding:none]:[minute][period]"
                ))
                .unwrap_or("<unknown>".to_string()),
            TimeFormat::Unix => time.unix_timestamp().to_string(),
            TimeFormat::UnixMs => (time.unix_timestamp_nanos() / 1_000_000).to_string(),
        }
    }
}

/// Writes records as human readable lines:
/// `<time> <LVL> <message> error=<error> key=value ...`.
///
/// The `error` field comes first; the remaining fields are sorted by key.
pub struct ConsoleWriter<W> {
    out: Mutex<W>,
    time_format: TimeFormat,
}

impl<W: Write + Send> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            time_format: TimeFormat::default(),
        }
    }

    pub fn time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    fn format(&self, record: &Record<'_>) -> String {
        let time = record.time.map(|t| self.time_format.render(t));
        let level = record.level.abbreviation();
        let message = (!record.message.is_empty()).then(|| record.message.to_string());
        let fields = record
            .all_fields()
            .sorted_by(|a, b| {
                (a.key != ERROR_FIELD)
                    .cmp(&(b.key != ERROR_FIELD))
                    .then_with(|| a.key.cmp(&b.key))
            })
            .map(format_field);

        time.into_iter()
            .chain(std::iter::once(level))
            .chain(message)
            .chain(fields)
            .join(" ")
    }
}

fn format_field(field: &Field) -> String {
    match &field.value {
        serde_json::Value::String(s) if !s.is_empty() && !s.contains(char::is_whitespace) => {
            format!("{}={s}", field.key)
        }
        other => format!("{}={other}", field.key),
    }
}

impl<W: Write + Send> LevelWriter for ConsoleWriter<W> {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = self.format(record);
        line.push('\n');
        let mut out = lock(&self.out);
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}
