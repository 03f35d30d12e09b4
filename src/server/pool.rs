//! # Pool de Workers
//! src/server/pool.rs
//!
//! N workers de vida larga, creados una sola vez. Cada worker es un loop:
//! desencolar una conexión, atenderla, repetir. Un error atendiendo una
//! conexión se loguea y el worker sigue vivo; nada llega de vuelta al
//! acceptor.
//!
//! El pool se apaga cerrando la cola: los workers drenan lo pendiente,
//! reciben `None` y terminan. `Drop` hace join de todos.

use crate::queue::BoundedQueue;
use crate::server::connection;
use std::net::TcpStream;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Pool de N workers consumiendo de la cola de conexiones
pub struct WorkerPool {
    workers: Vec<Worker>,
    queue: Arc<BoundedQueue<TcpStream>>,
}

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerPool {
    /// Crea el pool y arranca los N workers
    pub fn new(size: usize, queue: Arc<BoundedQueue<TcpStream>>, root: Arc<PathBuf>) -> Self {
        assert!(size > 0, "worker pool size must be >= 1");

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::new(id, Arc::clone(&queue), Arc::clone(&root)));
        }

        Self { workers, queue }
    }
}

impl Worker {
    fn new(id: usize, queue: Arc<BoundedQueue<TcpStream>>, root: Arc<PathBuf>) -> Self {
        let thread = thread::spawn(move || {
            // get() retorna None cuando la cola se cierra y se drenó
            while let Some(stream) = queue.get() {
                if let Err(e) = connection::handle_connection(stream, &root) {
                    eprintln!("   Worker {}: error en conexión: {}", id, e);
                }
            }
        });

        Self {
            id,
            thread: Some(thread),
        }
    }
}

impl Drop for WorkerPool {
    /// Cierra la cola y espera a que cada worker termine lo que tenga
    fn drop(&mut self) {
        self.queue.close();

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    eprintln!("   Worker {}: terminó con pánico", worker.id);
                }
            }
        }
    }
}
