use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("Start must be in the past; end must be in the future and after start")]
    InvalidDateOrdering,

    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Invalid reference time '{input}', expected RFC 3339 (e.g. 2024-01-01T12:00:00Z)")]
    InvalidInstant { input: String },

    #[error("Key not found: {key}")]
    UnknownConfigKey { key: String },
}
