//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Lanza un thread por conexión con su worker
//!
//! El `ResponseWriter` se construye una sola vez y se comparte con `Arc`.

pub mod tcp;

pub use tcp::{Server, WorkerFactory};
