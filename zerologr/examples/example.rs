//! Logs through the facade with a console writer on stdout.
//!
//! The minimum level defaults to debug and can be changed with
//! `ZEROLOGR_LEVEL`, e.g. `ZEROLOGR_LEVEL=trace`.

use std::collections::BTreeMap;
use std::io;

use zerologr_backend::writer::{ConsoleWriter, TimeFormat};
use zerologr_backend::{Level, Logger as Backend};
use zerologr_facade::{Logger, kv};

fn main() {
    let level = std::env::var("ZEROLOGR_LEVEL")
        .ok()
        .and_then(|raw| raw.parse::<Level>().ok())
        .unwrap_or(Level::DEBUG);

    let backend = Backend::new(ConsoleWriter::new(io::stdout()).time_format(TimeFormat::Rfc3339))
        .level(level)
        .with()
        .timestamp()
        .logger();

    let log = zerologr::new_logger(backend);

    example(log.with_values(&kv!["module", "example"]));
}

// Only the facade is needed here; nothing refers to the backend.
fn example(log: Logger) {
    let val2: BTreeMap<&str, i32> = [("k", 1)].into();
    log.info("hello", &kv!["val1", 1, "val2", val2]);
    log.v(1).info("you should see this", &[]);
    log.v(1).v(1).info("you should NOT see this", &[]);
    log.error(
        None,
        "uh oh",
        &kv!["trouble", true, "reasons", [0.1, 0.11, 3.5]],
    );
    let err = io::Error::other("an error occurred");
    log.error(Some(&err), "goodbye", &kv!["code", -1]);
}
