use thiserror::Error;
use zerologr_facade::Value;

/// A malformed key-value argument list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("odd number of arguments passed as key-value pairs for logging")]
    OddArguments,
    #[error("non-string key argument passed to logging: {key}")]
    NonStringKey { key: Value },
}
