use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that stop a seeding run.
///
/// Non-success responses on individual records are not errors: they are
/// logged and the sweep moves on. Only the legacy person upload turns a
/// rejected record into [`SeedError::Aborted`].
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field} for {record}: {value:?}")]
    InvalidField {
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("aborted: {entity} {key} was rejected with status {status}: {body}")]
    Aborted {
        entity: &'static str,
        key: String,
        status: StatusCode,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, SeedError>;
