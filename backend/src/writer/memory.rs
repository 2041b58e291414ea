use std::io;
use std::sync::{Arc, Mutex};

use super::{LevelWriter, lock};
use crate::Record;

/// Keeps records in memory as JSON lines. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// The records parsed back into JSON values, oldest first.
    pub fn records(&self) -> Vec<serde_json::Value> {
        lock(&self.lines)
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.lines).clear();
    }
}

impl LevelWriter for MemoryWriter {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        let line = serde_json::to_string(record)?;
        lock(&self.lines).push(line);
        Ok(())
    }
}
