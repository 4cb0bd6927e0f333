//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y procesa cada una en su propio thread. La conexión se
//! mueve dentro del thread: nunca se comparte.

use crate::config::Config;
use crate::connection::TcpConnection;
use crate::error::ServerError;
use crate::http::{ResponseWriter, Status};
use crate::worker::{IndexWorker, StatusWorker, Worker};
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Construye el worker de cada conexión a partir del writer compartido
pub type WorkerFactory = Arc<dyn Fn(Arc<ResponseWriter>) -> Box<dyn Worker> + Send + Sync>;

/// Servidor HTTP/1.0 concurrente
pub struct Server {
    config: Config,
    writer: Arc<ResponseWriter>,
    factory: WorkerFactory,
    active: Arc<AtomicUsize>,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración y hace bind del listener.
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        config.validate()?;

        let address = config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

        Ok(Self {
            writer: Arc::new(ResponseWriter::new(config.server_name.clone())),
            factory: Arc::new(|writer: Arc<ResponseWriter>| -> Box<dyn Worker> {
                Box::new(IndexWorker::new(writer))
            }),
            active: Arc::new(AtomicUsize::new(0)),
            config,
            listener,
        })
    }

    /// Reemplaza el constructor de workers (por defecto `IndexWorker`)
    pub fn with_worker_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Arc<ResponseWriter>) -> Box<dyn Worker> + Send + Sync + 'static,
    {
        self.factory = Arc::new(factory);
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de aceptación. Solo retorna si el listener deja de producir
    /// conexiones.
    pub fn run(self) -> Result<(), ServerError> {
        if let Ok(addr) = self.local_addr() {
            tracing::info!("Servidor escuchando en {}", addr);
        }
        tracing::info!("Modo concurrente: un thread por conexión");

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.dispatch(stream),
                Err(e) => tracing::error!("Error al aceptar conexión: {}", e),
            }
        }

        Ok(())
    }

    fn dispatch(&self, stream: TcpStream) {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        let guard = ActiveGuard(Arc::clone(&self.active));

        let worker = if active > self.config.max_connections {
            tracing::debug!("Límite de conexiones alcanzado ({}), 503 para {}", active - 1, peer);
            Box::new(StatusWorker::new(
                Arc::clone(&self.writer),
                Status::SERVICE_UNAVAILABLE,
            )) as Box<dyn Worker>
        } else {
            (self.factory)(Arc::clone(&self.writer))
        };

        let root_dir = self.config.root_dir.clone();
        let timeout = self.config.timeout();

        tracing::debug!("Nueva conexión desde {} (spawning thread)", peer);

        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer))
            .spawn(move || {
                let _guard = guard;
                let mut worker = worker;
                if let Err(e) = worker.initialize(Box::new(TcpConnection::new(stream)), root_dir, timeout) {
                    tracing::error!("No se pudo inicializar el worker para {}: {}", peer, e);
                    return;
                }
                worker.run();
            });

        if let Err(e) = spawned {
            tracing::error!("No se pudo crear el thread: {}", e);
        }
    }
}

/// Decrementa el contador de conexiones activas al terminar el thread
struct ActiveGuard(Arc<AtomicUsize>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::time::Duration;

    fn ephemeral_config() -> Config {
        Config {
            port: 0,
            ..Config::default()
        }
    }

    fn get(addr: SocketAddr) -> String {
        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        client.write_all(b"GET / HTTP/1.0\r\n\r\n").unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_bind_rejects_invalid_config() {
        let mut config = ephemeral_config();
        config.max_connections = 0;
        assert!(matches!(Server::bind(config), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_bind_error_on_used_port() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = ephemeral_config();
        config.port = taken.local_addr().unwrap().port();
        assert!(matches!(Server::bind(config), Err(ServerError::Bind { .. })));
    }

    #[test]
    fn test_dispatch_with_custom_factory() {
        let server = Server::bind(ephemeral_config())
            .unwrap()
            .with_worker_factory(|writer| Box::new(StatusWorker::new(writer, Status::NOT_IMPLEMENTED)));
        let addr = server.local_addr().unwrap();

        let client = thread::spawn(move || get(addr));
        let (stream, _) = server.listener.accept().unwrap();
        server.dispatch(stream);

        let text = client.join().unwrap();
        assert!(text.starts_with("HTTP/1.0 501 Not Implemented\r\n"));
        assert!(text.contains(&format!("Server: {}\r\n", crate::http::DEFAULT_SERVER_NAME)));
    }

    #[test]
    fn test_dispatch_over_limit_returns_503() {
        let mut config = ephemeral_config();
        config.max_connections = 1;
        let server = Server::bind(config).unwrap();
        let addr = server.local_addr().unwrap();

        // Simula una conexión que ya ocupa el único cupo
        server.active.fetch_add(1, Ordering::SeqCst);

        let client = thread::spawn(move || get(addr));
        let (stream, _) = server.listener.accept().unwrap();
        server.dispatch(stream);

        let text = client.join().unwrap();
        assert!(text.starts_with("HTTP/1.0 503 Service Unavailable\r\n"));
        assert!(text.ends_with("503 Service Unavailable"));
    }

    #[test]
    fn test_active_guard_decrements() {
        let counter = Arc::new(AtomicUsize::new(1));
        drop(ActiveGuard(Arc::clone(&counter)));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
