//! # http10_responder
//! src/lib.rs
//!
//! Servidor HTTP/1.0 mínimo. El núcleo es el `ResponseWriter`: serializa
//! una respuesta completa sobre una conexión ya aceptada y la cierra, sin
//! propagar errores de I/O.
//!
//! ## Arquitectura
//!
//! - `http`: status, headers y el `ResponseWriter`
//! - `connection`: abstracción de la conexión del cliente
//! - `worker`: contrato `initialize` / `run` y sus variantes
//! - `server`: acceptor con un thread por conexión
//! - `config`: CLI y variables de entorno
//! - `error`: errores de arranque
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http10_responder::config::Config;
//! use http10_responder::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("bind");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod server;
pub mod worker;
