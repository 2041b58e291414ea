use std::io::{self, Write};
use std::sync::Mutex;

use super::{LevelWriter, lock};
use crate::Record;

/// Writes each record as one line of JSON.
pub struct JsonWriter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> LevelWriter for JsonWriter<W> {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        let mut out = lock(&self.out);
        out.write_all(&line)?;
        out.flush()
    }
}
