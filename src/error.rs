// src/error.rs
use thiserror::Error;

/// Hard failures: the body could not be read as the expected format at all.
///
/// Missing optional fields and malformed rows are *not* errors; those degrade
/// to `None`, a sentinel, or a skipped row inside the extractors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("JSON envelope has no `{0}` field")]
    MissingKey(&'static str),

    #[error("JSON envelope field `{key}` should be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("bad escape sequence at byte {offset}: {reason}")]
    Escape { offset: usize, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Parse a body that must be a JSON object.
pub(crate) fn json_object(body: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ScrapeError::NotAnObject),
    }
}
