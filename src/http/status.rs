//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Un `Status` es el par inmutable (código, descripción). La descripción se
//! escribe tal cual en la status line, así que las constantes predefinidas
//! usan la forma `"200 OK"`.

use std::borrow::Cow;
use std::fmt;

/// Código de estado HTTP con su descripción
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: u16,
    description: Cow<'static, str>,
}

impl Status {
    /// 200 OK - La petición fue exitosa
    pub const OK: Status = Status::from_static(200, "200 OK");

    /// 204 No Content - Petición exitosa sin contenido en el body
    pub const NO_CONTENT: Status = Status::from_static(204, "204 No Content");

    /// 403 Forbidden
    pub const FORBIDDEN: Status = Status::from_static(403, "403 Forbidden");

    /// 404 Not Found - Recurso no encontrado en el directorio raíz
    pub const NOT_FOUND: Status = Status::from_static(404, "404 Not Found");

    /// 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: Status = Status::from_static(500, "500 Internal Server Error");

    /// 501 Not Implemented
    pub const NOT_IMPLEMENTED: Status = Status::from_static(501, "501 Not Implemented");

    /// 503 Service Unavailable - Servidor sobrecargado
    pub const SERVICE_UNAVAILABLE: Status = Status::from_static(503, "503 Service Unavailable");

    /// Crea un status arbitrario; la descripción puede construirse en runtime
    ///
    /// # Ejemplo
    /// ```
    /// use http10_responder::http::Status;
    ///
    /// let status = Status::new(418, format!("{} I'm a teapot", 418));
    /// assert_eq!(status.code(), 418);
    /// assert_eq!(status.description(), "418 I'm a teapot");
    /// ```
    pub fn new(code: u16, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Versión `const` para descripciones estáticas
    pub const fn from_static(code: u16, description: &'static str) -> Self {
        Self {
            code,
            description: Cow::Borrowed(description),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Texto usado literalmente en la status line y en `write_status`
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
