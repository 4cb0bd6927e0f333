//! # Conexiones
//! src/connection.rs
//!
//! Una `Connection` es el stream bidireccional de un cliente. Cada worker es
//! dueño exclusivo de la suya durante todo el intercambio; el
//! `ResponseWriter` solo la toma prestada durante una escritura.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

/// Capacidades que el escritor y los workers necesitan de una conexión
pub trait Connection: Read + Write + Send {
    /// `true` si la conexión sigue abierta y conectada.
    ///
    /// Se consulta inmediatamente antes de escribir.
    fn is_open(&self) -> bool;

    /// Cierra la conexión. Cerrar dos veces no es un error.
    fn close(&mut self) -> io::Result<()>;

    /// Aplica timeouts de lectura y escritura a nivel de socket
    fn set_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;

    /// Identificación del peer para los logs
    fn peer_label(&self) -> String {
        "unknown".to_string()
    }
}

/// Conexión TCP aceptada por el servidor
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
    closed: bool,
}

impl TcpConnection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            closed: false,
        }
    }
}

impl Read for TcpConnection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TcpConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

impl Connection for TcpConnection {
    fn is_open(&self) -> bool {
        // peer_addr falla con NotConnected cuando el socket ya no tiene peer.
        // take_error lee y limpia SO_ERROR: cada llamada consume el error
        // pendiente del socket.
        !self.closed
            && self.stream.peer_addr().is_ok()
            && matches!(self.stream.take_error(), Ok(None))
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.stream.shutdown(Shutdown::Both)
    }

    fn set_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.stream.set_read_timeout(timeout)?;
        self.stream.set_write_timeout(timeout)
    }

    fn peer_label(&self) -> String {
        self.stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
