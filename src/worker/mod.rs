//! # Workers
//! src/worker/mod.rs
//!
//! Un worker atiende una única conexión de principio a fin. El ciclo de vida
//! es siempre el mismo:
//!
//! ```text
//! acceptor → initialize(conexión, root_dir, timeout) → run() → conexión cerrada
//! ```
//!
//! Las variantes concretas no heredan nada: reciben el `ResponseWriter`
//! compartido por constructor y lo usan para responder.

pub mod index;
pub mod status;

pub use index::IndexWorker;
pub use status::StatusWorker;

use crate::connection::Connection;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

/// Máximo de bytes del request que se descartan antes de responder
pub const MAX_REQUEST_HEAD: usize = 8192;

/// Contrato de un worker por conexión
pub trait Worker: Send {
    /// Toma posesión de la conexión y aplica el timeout de socket.
    fn initialize(
        &mut self,
        connection: Box<dyn Connection>,
        root_dir: PathBuf,
        timeout: Option<Duration>,
    ) -> io::Result<()>;

    /// Atiende la conexión. Consume el worker: cada instancia sirve una sola vez.
    fn run(self: Box<Self>);
}

/// Conexión asignada a un worker por `initialize`
pub struct Assignment {
    pub connection: Box<dyn Connection>,
    pub root_dir: PathBuf,
}

impl Assignment {
    pub fn new(
        connection: Box<dyn Connection>,
        root_dir: PathBuf,
        timeout: Option<Duration>,
    ) -> io::Result<Self> {
        connection.set_timeout(timeout)?;
        Ok(Self {
            connection,
            root_dir,
        })
    }
}

/// Lee y descarta el request hasta la primera línea vacía, EOF o
/// `MAX_REQUEST_HEAD` bytes. No interpreta nada de lo leído.
///
/// Cerrar el socket con datos sin leer envía RST en lugar de FIN.
pub fn drain_request_head(conn: &mut dyn Connection) -> io::Result<usize> {
    let mut head = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    while head.len() < MAX_REQUEST_HEAD {
        let n = conn.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if ends_head(&head) {
            break;
        }
    }

    Ok(head.len())
}

fn ends_head(buf: &[u8]) -> bool {
    buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.windows(2).any(|w| w == b"\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::mock::MockConnection;

    #[test]
    fn test_drain_stops_at_blank_line() {
        let mut conn = MockConnection::new().with_input(b"GET / HTTP/1.0\r\nHost: x\r\n\r\n");
        assert_eq!(drain_request_head(&mut conn).unwrap(), 27);
    }

    #[test]
    fn test_drain_bare_lf() {
        let mut conn = MockConnection::new().with_input(b"GET / HTTP/1.0\n\n");
        assert_eq!(drain_request_head(&mut conn).unwrap(), 16);
    }

    #[test]
    fn test_drain_empty_input() {
        let mut conn = MockConnection::new();
        assert_eq!(drain_request_head(&mut conn).unwrap(), 0);
    }

    #[test]
    fn test_drain_is_bounded() {
        let input = vec![b'a'; MAX_REQUEST_HEAD * 2];
        let mut conn = MockConnection::new().with_input(&input);
        let drained = drain_request_head(&mut conn).unwrap();
        assert!(drained >= MAX_REQUEST_HEAD);
        assert!(drained < MAX_REQUEST_HEAD + 1024);
    }
}
