//! # Errores
//! src/error.rs
//!
//! Solo el arranque del servidor produce errores tipados. Los errores de
//! cada conexión terminan en el log (ver `http::response`).

use std::io;
use thiserror::Error;

/// Valores inválidos en la configuración
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max connections must be >= 1")]
    MaxConnections,

    #[error("server name must not be empty")]
    EmptyServerName,

    #[error("server name must not contain CR or LF")]
    InvalidServerName,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
}
