//! # Módulo HTTP
//!
//! Tipos mínimos del protocolo HTTP/1.0 y el escritor de respuestas.
//! No hay parsing de requests.
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-length: 2\r\n
//! Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n
//! Server: http10_responder/0.1.0\r\n
//! \r\n
//! hi
//! ```

pub mod header;
pub mod response;
pub mod status;

pub use header::{Header, CRLF};
pub use response::{ResponseWriter, WriteOutcome, DEFAULT_SERVER_NAME};
pub use status::Status;
