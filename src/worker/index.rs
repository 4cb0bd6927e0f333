//! # IndexWorker
//! src/worker/index.rs
//!
//! Sirve `<root_dir>/index.html` a cualquier request. No hay parsing ni
//! routing: el path pedido se ignora.

use super::{drain_request_head, Assignment, Worker};
use crate::connection::Connection;
use crate::http::{Header, ResponseWriter, Status};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Archivo servido desde el directorio raíz
pub const INDEX_FILE: &str = "index.html";

pub struct IndexWorker {
    writer: Arc<ResponseWriter>,
    assignment: Option<Assignment>,
}

impl IndexWorker {
    pub fn new(writer: Arc<ResponseWriter>) -> Self {
        Self {
            writer,
            assignment: None,
        }
    }
}

impl Worker for IndexWorker {
    fn initialize(
        &mut self,
        connection: Box<dyn Connection>,
        root_dir: PathBuf,
        timeout: Option<Duration>,
    ) -> io::Result<()> {
        self.assignment = Some(Assignment::new(connection, root_dir, timeout)?);
        Ok(())
    }

    fn run(self: Box<Self>) {
        let IndexWorker { writer, assignment } = *self;
        let Some(Assignment {
            mut connection,
            root_dir,
        }) = assignment
        else {
            tracing::warn!("IndexWorker ejecutado sin inicializar");
            return;
        };

        if let Err(e) = drain_request_head(connection.as_mut()) {
            tracing::debug!("No se pudo leer el request: {}", e);
        }

        let peer = connection.peer_label();
        let path = root_dir.join(INDEX_FILE);
        let conn = connection.as_mut();

        let outcome = match fs::read(&path) {
            Ok(body) => {
                let headers = [Header::content_type("text/html")];
                writer.write_full(conn, &Status::OK, &headers, &body)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} no existe", path.display());
                writer.write_status(conn, &Status::NOT_FOUND)
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                tracing::debug!("Sin permisos para leer {}", path.display());
                writer.write_status(conn, &Status::FORBIDDEN)
            }
            Err(e) => {
                tracing::error!("Error al leer {}: {}", path.display(), e);
                writer.write_status(conn, &Status::INTERNAL_SERVER_ERROR)
            }
        };

        tracing::debug!(%peer, ?outcome, "Respuesta de index");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::mock::{MockConnection, MockHandle};

    fn run_index(root_dir: PathBuf) -> MockHandle {
        let conn = MockConnection::new().with_input(b"GET /cualquier/cosa HTTP/1.0\r\n\r\n");
        let handle = conn.handle();

        let mut worker = Box::new(IndexWorker::new(Arc::new(ResponseWriter::new("idx/1.0"))));
        worker.initialize(Box::new(conn), root_dir, None).unwrap();
        worker.run();
        handle
    }

    #[test]
    fn test_serves_index_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<h1>Hola</h1>").unwrap();

        let handle = run_index(dir.path().to_path_buf());

        let text = handle.output_text();
        assert!(text.starts_with("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n"));
        assert!(text.contains("Content-length: 13\r\n"));
        assert!(text.contains("Server: idx/1.0\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>Hola</h1>"));
        assert!(handle.is_closed());
    }

    #[test]
    fn test_missing_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let handle = run_index(dir.path().to_path_buf());

        let text = handle.output_text();
        assert!(text.starts_with("HTTP/1.0 404 Not Found\r\n"));
        assert!(text.ends_with("\r\n\r\n404 Not Found"));
    }

    #[test]
    fn test_index_is_directory_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(INDEX_FILE)).unwrap();

        let handle = run_index(dir.path().to_path_buf());

        let text = handle.output_text();
        assert!(text.starts_with("HTTP/1.0 500 Internal Server Error\r\n"));
    }

    #[test]
    fn test_empty_index_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "").unwrap();

        let handle = run_index(dir.path().to_path_buf());

        let text = handle.output_text();
        assert!(text.contains("Content-length: 0\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }
}
