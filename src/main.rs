//! # File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0 de archivos estáticos.

use file_server::config::Config;
use file_server::server::Server;

fn main() {
    println!("=================================");
    println!("  HTTP/1.0 Static File Server");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    // clap valida la cantidad de argumentos y termina con uso si faltan
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("Error de configuración: {}", e);
        std::process::exit(1);
    }

    println!("Configuración:");
    println!("   Dirección:     {}", config.address());
    println!("   Document root: {}", config.document_root);
    println!("   Workers:       {}", config.workers);
    println!("   Cola:          {} conexiones\n", config.queue_capacity);

    let server = Server::new(config);

    if let Err(e) = server.run() {
        eprintln!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
