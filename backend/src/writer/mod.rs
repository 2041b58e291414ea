//! Destinations for finished records.

mod console;
mod json;
mod memory;

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Record;

pub use console::{ConsoleWriter, TimeFormat};
pub use json::JsonWriter;
pub use memory::MemoryWriter;

/// Writes finished records somewhere.
///
/// Writers are shared between every logger derived from the same root, so
/// implementations serialize concurrent writes themselves.
pub trait LevelWriter: Send + Sync {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()>;
}

impl<T: LevelWriter + ?Sized> LevelWriter for Arc<T> {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).write_record(record)
    }
}

// A panic while holding a writer lock leaves at worst a partial line behind.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
