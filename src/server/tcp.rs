//! # Acceptor TCP
//! src/server/tcp.rs
//!
//! El servidor arma la cola acotada y el pool de workers, y corre el loop
//! de accept en el thread llamador. Cada conexión aceptada se encola con
//! `put`; cuando la cola está llena, `put` bloquea al acceptor y las
//! conexiones nuevas esperan en el backlog del kernel. Ese bloqueo es el
//! mecanismo de backpressure.
//!
//! Los errores de setup (bind, accept) son fatales para el proceso; los
//! errores por conexión viven y mueren dentro del worker que la atiende.

use crate::config::Config;
use crate::queue::BoundedQueue;
use crate::server::pool::WorkerPool;
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;

/// Servidor HTTP/1.0 de archivos estáticos
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Hace bind y sirve indefinidamente
    ///
    /// Solo retorna con error: un fallo de bind o de accept termina el
    /// proceso con estado 1 desde `main`.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);

        self.serve(listener)
    }

    /// Loop del acceptor sobre un listener ya creado
    ///
    /// Público para que los tests puedan servir sobre un puerto efímero.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        let queue: Arc<BoundedQueue<TcpStream>> =
            Arc::new(BoundedQueue::new(self.config.queue_capacity));
        let root = Arc::new(PathBuf::from(&self.config.document_root));

        let _pool = WorkerPool::new(self.config.workers, Arc::clone(&queue), root);
        println!(
            "[*] Pool: {} workers, cola de capacidad {}\n",
            self.config.workers, self.config.queue_capacity
        );

        for stream in listener.incoming() {
            // Un fallo de accept es fatal a nivel de proceso
            let stream = stream?;

            if let Ok(peer) = stream.peer_addr() {
                println!("   Conexión desde {}", peer);
            }

            // Bloquea cuando la cola está llena (backpressure). Err solo
            // si la cola fue cerrada, lo que no ocurre en este loop.
            if queue.put(stream).is_err() {
                break;
            }
        }

        Ok(())
    }
}
