//! # Cola Acotada Productor/Consumidor
//! src/queue.rs
//!
//! Implementa el buffer acotado clásico como un monitor: un mutex protege el
//! estado interno y dos condition variables (`data_available` y
//! `space_available`) coordinan a productores y consumidores.
//!
//! El acceptor encola conexiones con [`BoundedQueue::put`] y los workers las
//! retiran con [`BoundedQueue::get`]. Cuando la cola está llena, `put`
//! bloquea al acceptor: esa es la válvula de backpressure que limita cuántas
//! conexiones esperan servicio.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Estado interno del monitor, siempre accedido con el mutex tomado
struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Cola FIFO de capacidad fija, thread-safe
///
/// Invariantes:
/// - `0 <= len() <= capacity()` en todo momento
/// - los items salen en el mismo orden en que entraron, sin pérdidas
///   ni duplicados
pub struct BoundedQueue<T> {
    inner: Mutex<Inner<T>>,
    data_available: Condvar,
    space_available: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Crea una cola con la capacidad indicada (fija de por vida)
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be >= 1");
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            data_available: Condvar::new(),
            space_available: Condvar::new(),
            capacity,
        }
    }

    /// Encola un item al final de la cola
    ///
    /// Bloquea al thread llamador mientras la cola esté llena. El predicado
    /// se re-verifica en un loop al despertar, para tolerar despertares
    /// espurios y la competencia entre varios productores.
    ///
    /// Retorna `Err` con el item si la cola fue cerrada con [`close`].
    ///
    /// [`close`]: BoundedQueue::close
    pub fn put(&self, item: T) -> Result<(), T> {
        let mut inner = self.inner.lock().unwrap();

        while inner.items.len() == self.capacity && !inner.closed {
            inner = self.space_available.wait(inner).unwrap();
        }

        if inner.closed {
            return Err(item);
        }

        inner.items.push_back(item);
        self.data_available.notify_one();
        Ok(())
    }

    /// Desencola el item al frente de la cola
    ///
    /// Bloquea mientras la cola esté vacía. Retorna `None` cuando la cola
    /// fue cerrada y ya se drenaron todos los items pendientes.
    pub fn get(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();

        while inner.items.is_empty() && !inner.closed {
            inner = self.data_available.wait(inner).unwrap();
        }

        match inner.items.pop_front() {
            Some(item) => {
                self.space_available.notify_one();
                Some(item)
            }
            // cerrada y vacía
            None => None,
        }
    }

    /// Cierra la cola y despierta a todos los threads bloqueados
    ///
    /// Después del cierre, `put` rechaza items nuevos y `get` retorna `None`
    /// una vez drenados los pendientes. Permite apagar el pool de workers
    /// sin rediseñar el monitor.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        self.data_available.notify_all();
        self.space_available.notify_all();
    }

    /// Retorna el tamaño actual de la cola
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    /// Verifica si la cola está vacía
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verifica si la cola está llena
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Retorna la capacidad máxima
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
