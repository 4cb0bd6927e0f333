//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http10_responder --port 8080 --root-dir ./www --timeout-ms 5000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=0.0.0.0 ROOT_DIR=/srv/www ./http10_responder
//! ```

use crate::error::ConfigError;
use crate::http::DEFAULT_SERVER_NAME;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Configuración del servidor HTTP/1.0
#[derive(Debug, Clone, Parser)]
#[command(name = "http10_responder")]
#[command(about = "Servidor HTTP/1.0 mínimo: un thread por conexión")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz del que los workers leen archivos
    #[arg(long = "root-dir", default_value = "./www", env = "ROOT_DIR")]
    pub root_dir: PathBuf,

    /// Timeout de lectura/escritura del socket en milisegundos (0 = sin timeout)
    #[arg(long = "timeout-ms", default_value = "30000", env = "SOCKET_TIMEOUT_MS")]
    pub timeout_ms: u64,

    /// Conexiones simultáneas antes de responder 503
    #[arg(long = "max-connections", default_value = "256", env = "MAX_CONNECTIONS")]
    pub max_connections: usize,

    /// Valor del header `Server`
    #[arg(long = "server-name", default_value = DEFAULT_SERVER_NAME, env = "SERVER_NAME")]
    pub server_name: String,
}

impl Config {
    /// Crea la configuración parseando argumentos CLI (y variables de entorno)
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http10_responder::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de socket; `None` si `timeout_ms` es 0
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::MaxConnections);
        }
        if self.server_name.trim().is_empty() {
            return Err(ConfigError::EmptyServerName);
        }
        // Terminaría el header antes de tiempo
        if self.server_name.contains(['\r', '\n']) {
            return Err(ConfigError::InvalidServerName);
        }
        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        tracing::info!("Address:         {}", self.address());
        tracing::info!("Root dir:        {}", self.root_dir.display());
        match self.timeout() {
            Some(t) => tracing::info!("Socket timeout:  {} ms", t.as_millis()),
            None => tracing::info!("Socket timeout:  disabled"),
        }
        tracing::info!("Max connections: {}", self.max_connections);
        tracing::info!("Server header:   {}", self.server_name);
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            root_dir: PathBuf::from("./www"),
            timeout_ms: 30_000,
            max_connections: 256,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}
