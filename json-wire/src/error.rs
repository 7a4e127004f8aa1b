use thiserror::Error;

/// The caller passed arguments that don't fit the shape of a protocol command.
///
/// Raised before anything is sent to the remote end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProtocolError {
    pub message: String,
}

impl ProtocolError {
    #[must_use]
    pub fn arguments_mismatch(command: &str) -> Self {
        Self {
            message: format!(
                "number or type of arguments don't agree with {command} protocol command"
            ),
        }
    }
}

#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum Error {
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("command needs a session but no session id is configured")]
    NoSession,
    #[error("invalid remote end url {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    #[error("remote end url {0} does not use http")]
    UnsupportedScheme(String),
    #[error("remote end url {0} has no host")]
    MissingHost(String),
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    #[error("hyper {0}")]
    Hyper(#[from] hyper::Error),
    #[error("hyper http {0}")]
    Http(#[from] hyper::http::Error),
    #[error("json error {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse received message {0}")]
    ParseReceivedWithPath(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("remote end answered with http status {status}: {body}")]
    HttpStatus {
        status: hyper::StatusCode,
        body: String,
    },
    #[error("remote end failed with status {status}: {message}")]
    Remote { status: i64, message: String },
    #[error("config error {0}")]
    Config(#[from] json_wire_config::ConfigError),
}

pub type Result<T> = core::result::Result<T, Error>;
