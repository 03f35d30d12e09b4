//! # Módulo del Servidor
//!
//! Acceptor TCP, pool de workers y manejo de conexiones individuales.
//!
//! ```text
//! Acceptor (1 thread) → BoundedQueue → N workers → handle_connection
//! ```

pub mod connection;
pub mod pool;
pub mod tcp;

pub use pool::WorkerPool;
pub use tcp::Server;
