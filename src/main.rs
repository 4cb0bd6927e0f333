//! # http10_responder - Entry Point
//! src/main.rs

use http10_responder::config::Config;
use http10_responder::server::Server;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::new();
    config.log_summary();

    let result = Server::bind(config).and_then(Server::run);

    if let Err(e) = result {
        tracing::error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
