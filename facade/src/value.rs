use serde::Serialize;

/// An opaque logging value.
///
/// Sinks pass values through to their backend without interpreting them.
pub type Value = serde_json::Value;

/// Converts anything serializable into a [`Value`].
///
/// Logging must never fail the caller, so a value that cannot be serialized
/// becomes a string placeholder describing the failure.
pub fn value<T: Serialize + ?Sized>(v: &T) -> Value {
    serde_json::to_value(v).unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}
