use zerologr_backend::{Context, Event};
use zerologr_facade::Value;

use crate::ValidationError;

/// One key-value argument.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

/// Splits a flat `key, value, key, value, ...` list into pairs, keeping order.
///
/// Keys must be strings. An empty list yields no pairs.
pub fn build_pairs(args: &[Value]) -> Result<Vec<KeyValue>, ValidationError> {
    if args.len() % 2 != 0 {
        return Err(ValidationError::OddArguments);
    }

    args.chunks_exact(2)
        .map(|pair| match &pair[0] {
            Value::String(key) => Ok(KeyValue {
                key: key.clone(),
                value: pair[1].clone(),
            }),
            key => Err(ValidationError::NonStringKey { key: key.clone() }),
        })
        .collect()
}

pub(crate) fn add_to_event<'a>(event: Event<'a>, pairs: Vec<KeyValue>) -> Event<'a> {
    pairs
        .into_iter()
        .fold(event, |event, kv| event.field(kv.key, kv.value))
}

pub(crate) fn add_to_context(context: Context, pairs: Vec<KeyValue>) -> Context {
    pairs
        .into_iter()
        .fold(context, |context, kv| context.field(kv.key, kv.value))
}
