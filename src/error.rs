use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StatusError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("ftp session on {host} failed: {message}")]
    Ftp { host: String, message: String },

    #[error("no pattern match in {0} content")]
    NoMatch(&'static str),

    #[error("malformed timestamp: {0}")]
    Timestamp(String),

    #[error("malformed JSON payload: {0}")]
    Json(String),

    #[error("archive inspection failed: {0}")]
    Archive(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
