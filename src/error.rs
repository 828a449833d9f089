use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("read key file `{path}` failed: {source}")]
    ReadKeyFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("parse key file failed: {0}")]
    ParseKeyFailed(#[from] serde_json::Error),

    #[error("bind `{addr}` failed: {source}")]
    BindFailed {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("serve failed: {0}")]
    ServeFailed(std::io::Error),
}
