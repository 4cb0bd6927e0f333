//! # Headers HTTP
//! src/http/header.rs
//!
//! Pares nombre/valor inmutables. El orden lo define quien llama: los
//! headers se serializan exactamente en el orden en que se entregan, sin
//! deduplicar ni fusionar.

use std::fmt;
use std::time::SystemTime;

/// Terminador de línea. HTTP exige CRLF sin importar la plataforma.
pub const CRLF: &[u8] = b"\r\n";

/// Un header HTTP (par nombre/valor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    /// Crea un nuevo header
    ///
    /// # Ejemplo
    /// ```
    /// use http10_responder::http::Header;
    ///
    /// let header = Header::new("X-Custom", "value");
    /// assert_eq!(header.to_string(), "X-Custom: value");
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `Content-Type: <mime>`
    pub fn content_type(mime: impl Into<String>) -> Self {
        Self::new("Content-Type", mime)
    }

    /// `Content-length: <len>`
    pub fn content_length(len: usize) -> Self {
        Self::new("Content-length", len.to_string())
    }

    /// `Date: <IMF-fixdate>` calculado con el instante dado
    pub fn date(at: SystemTime) -> Self {
        Self::new("Date", httpdate::fmt_http_date(at))
    }

    /// `Server: <identidad>`
    pub fn server(identity: impl Into<String>) -> Self {
        Self::new("Server", identity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Agrega `Name: Value\r\n` al buffer
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(self.value.as_bytes());
        buf.extend_from_slice(CRLF);
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
