//! # StatusWorker
//! src/worker/status.rs
//!
//! Responde cualquier conexión con un status fijo. El acceptor lo usa para
//! devolver `503 Service Unavailable` cuando se supera el límite de
//! conexiones.

use super::{drain_request_head, Assignment, Worker};
use crate::connection::Connection;
use crate::http::{ResponseWriter, Status};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub struct StatusWorker {
    writer: Arc<ResponseWriter>,
    status: Status,
    assignment: Option<Assignment>,
}

impl StatusWorker {
    pub fn new(writer: Arc<ResponseWriter>, status: Status) -> Self {
        Self {
            writer,
            status,
            assignment: None,
        }
    }
}

impl Worker for StatusWorker {
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
        let StatusWorker {
            writer,
            status,
            assignment,
        } = *self;
        let Some(Assignment { mut connection, .. }) = assignment else {
            tracing::warn!("StatusWorker ejecutado sin inicializar");
            return;
        };

        if let Err(e) = drain_request_head(connection.as_mut()) {
            tracing::debug!("No se pudo leer el request: {}", e);
        }

        let peer = connection.peer_label();
        let outcome = writer.write_status(connection.as_mut(), &status);
        tracing::debug!(%peer, status = status.code(), ?outcome, "Respuesta de status");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::mock::MockConnection;

    #[test]
    fn test_status_worker_writes_status() {
        let conn = MockConnection::new().with_input(b"GET / HTTP/1.0\r\n\r\n");
        let handle = conn.handle();

        let mut worker = Box::new(StatusWorker::new(
            Arc::new(ResponseWriter::default()),
            Status::SERVICE_UNAVAILABLE,
        ));
        worker
            .initialize(Box::new(conn), PathBuf::from("."), None)
            .unwrap();
        worker.run();

        let text = handle.output_text();
        assert!(text.starts_with("HTTP/1.0 503 Service Unavailable\r\n"));
        assert!(text.ends_with("\r\n\r\n503 Service Unavailable"));
        assert!(handle.is_closed());
    }

    #[test]
    fn test_status_worker_without_initialize() {
        let worker = Box::new(StatusWorker::new(
            Arc::new(ResponseWriter::default()),
            Status::OK,
        ));
        // No debe hacer panic
        worker.run();
    }

    #[test]
    fn test_status_worker_disconnected_peer() {
        let conn = MockConnection::new().disconnected();
        let handle = conn.handle();

        let mut worker = Box::new(StatusWorker::new(
            Arc::new(ResponseWriter::default()),
            Status::OK,
        ));
        worker
            .initialize(Box::new(conn), PathBuf::from("."), None)
            .unwrap();
        worker.run();

        assert!(handle.output().is_empty());
    }
}
