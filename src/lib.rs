//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 de archivos estáticos implementado desde cero para
//! demostrar conceptos de sistemas operativos: concurrencia, sincronización
//! con monitores y backpressure entre productor y consumidores.
//!
//! ## Arquitectura
//!
//! ```text
//! Acceptor → BoundedQueue → WorkerPool → handle_connection
//!                                          ├── http::Request  (parse)
//!                                          ├── resolver       (path → target)
//!                                          └── http::response (respond)
//! ```
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y construcción de responses HTTP/1.0
//! - `queue`: Cola acotada productor/consumidor (mutex + condition variables)
//! - `resolver`: Resolución de paths sobre el document root
//! - `server`: Acceptor TCP, pool de workers y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno

pub mod config;
pub mod http;
pub mod queue;
pub mod resolver;
pub mod server;
