//! # Escritura de Respuestas HTTP/1.0
//! src/http/response.rs
//!
//! El `ResponseWriter` serializa una respuesta completa sobre una conexión y
//! luego la cierra. Es best-effort: ningún error de I/O se propaga a quien
//! llama, solo se registra en el log con la severidad adecuada.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.0 <descripción>\r\n
//! <headers del caller, en su orden>\r\n
//! Content-length: <bytes del body>\r\n
//! Date: <fecha HTTP>\r\n
//! Server: <identidad>\r\n
//! \r\n
//! <body>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http10_responder::connection::TcpConnection;
//! use http10_responder::http::{ResponseWriter, Status};
//! use std::net::TcpListener;
//!
//! let writer = ResponseWriter::new("demo/1.0");
//! let listener = TcpListener::bind("127.0.0.1:8080").unwrap();
//! let (stream, _) = listener.accept().unwrap();
//! let mut conn = TcpConnection::new(stream);
//! writer.write_text(&mut conn, &Status::OK, "<h1>hola</h1>");
//! ```

use super::{Header, Status, CRLF};
use crate::connection::Connection;
use std::io::{self, ErrorKind};
use std::time::SystemTime;

/// Identidad por defecto del header `Server`
pub const DEFAULT_SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Resultado de una escritura. Es solo informativo: ninguno es un error
/// que el caller deba manejar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Respuesta completa escrita y conexión cerrada
    Sent { bytes: usize },
    /// La conexión ya estaba cerrada; no se escribió nada
    Skipped,
    /// El peer se desconectó a mitad de la escritura
    Disconnected,
    /// Otro error de I/O
    Failed,
}

impl WriteOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, WriteOutcome::Sent { .. })
    }
}

/// Escritor de respuestas HTTP/1.0
///
/// Se construye una sola vez al iniciar el proceso y se comparte (solo
/// lectura) entre todos los threads de conexión.
#[derive(Debug, Clone)]
pub struct ResponseWriter {
    server: Header,
}

impl ResponseWriter {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server: Header::server(server_name),
        }
    }

    /// Header `Server` fijo que acompaña cada respuesta
    pub fn server_header(&self) -> &Header {
        &self.server
    }

    /// Escribe status line, headers, `Content-length`, `Date`, `Server`,
    /// línea vacía y body; después cierra la conexión.
    ///
    /// Si la conexión ya no está abierta no escribe ni un byte.
    pub fn write_full(
        &self,
        conn: &mut dyn Connection,
        status: &Status,
        headers: &[Header],
        body: &[u8],
    ) -> WriteOutcome {
        if !conn.is_open() {
            tracing::debug!(
                "Conexión cerrada o desconectada antes de enviar la respuesta ({})",
                status
            );
            return WriteOutcome::Skipped;
        }

        let head = self.encode_head(status, headers, body.len());
        match Self::send(conn, &head, body) {
            Ok(()) => WriteOutcome::Sent {
                bytes: head.len() + body.len(),
            },
            Err(err) if is_disconnect(&err) => {
                tracing::debug!("Peer desconectado durante la escritura: {}", err);
                WriteOutcome::Disconnected
            }
            Err(err) => {
                tracing::error!("Error de I/O al escribir la respuesta: {}", err);
                WriteOutcome::Failed
            }
        }
    }

    /// Respuesta HTML simple: `Content-Type: text/html` y el texto como body.
    ///
    /// La status line usa el mismo `status` recibido.
    pub fn write_text(&self, conn: &mut dyn Connection, status: &Status, text: &str) -> WriteOutcome {
        let headers = [Header::content_type("text/html")];
        self.write_full(conn, status, &headers, text.as_bytes())
    }

    /// Respuesta cuyo body es la propia descripción del status
    /// (ej: `"404 Not Found"`).
    pub fn write_status(&self, conn: &mut dyn Connection, status: &Status) -> WriteOutcome {
        self.write_text(conn, status, status.description())
    }

    fn encode_head(&self, status: &Status, headers: &[Header], body_len: usize) -> Vec<u8> {
        let mut head = Vec::with_capacity(256);

        head.extend_from_slice(b"HTTP/1.0 ");
        head.extend_from_slice(status.description().as_bytes());
        head.extend_from_slice(CRLF);

        for header in headers {
            header.write_to(&mut head);
        }

        // La fecha se calcula al escribir, no al construir la respuesta
        Header::content_length(body_len).write_to(&mut head);
        Header::date(SystemTime::now()).write_to(&mut head);
        self.server.write_to(&mut head);

        head.extend_from_slice(CRLF);
        head
    }

    fn send(conn: &mut dyn Connection, head: &[u8], body: &[u8]) -> io::Result<()> {
        conn.write_all(head)?;
        conn.write_all(body)?;
        conn.flush()?;
        conn.close()
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_NAME)
    }
}

/// Errores que indican que el peer cerró o reseteó la conexión
fn is_disconnect(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::UnexpectedEof
            | ErrorKind::WriteZero
    )
}
