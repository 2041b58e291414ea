use zerologr_backend::Level;

/// Backend levels are `i8`; facade verbosity is clamped to this first.
const MAX_VERBOSITY: i32 = i8::MAX as i32;

/// Translates facade verbosity to a backend level.
///
/// The scales are inverted and offset by one: verbosity 0 is
/// [`Level::INFO`], 1 is [`Level::DEBUG`], 2 is [`Level::TRACE`]. Results
/// outside the `i8` range saturate.
pub fn to_backend_level(level: i32) -> Level {
    let level = i64::from(level.min(MAX_VERBOSITY));
    let translated = (1 - level).clamp(i64::from(i8::MIN), i64::from(i8::MAX));
    Level::new(i8::try_from(translated).unwrap_or(i8::MIN))
}
