use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid resource identifier: {0:?}")]
    InvalidResource(String),

    #[error("GET requests cannot carry a payload")]
    PayloadNotAllowed,

    #[error("Response is missing field `{0}`")]
    MissingField(String),

    #[error("Unknown browser emulation: {0}")]
    InvalidEmulation(String),
}

impl Error {
    /// Transport and decode failures are reported the same way to the page;
    /// this only separates them for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Http(_) | Error::Status(_) => "transport",
            Error::Json(_) | Error::MissingField(_) => "decode",
            Error::InvalidResource(_) | Error::PayloadNotAllowed => "request",
            Error::Config(_) | Error::InvalidEmulation(_) => "config",
        }
    }
}
