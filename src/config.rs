//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./file_server 8080 ./www --workers 8 --queue-capacity 16
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_HOST=0.0.0.0 HTTP_WORKERS=4 ./file_server 8080 ./www
//! ```

use clap::Parser;
use std::path::Path;

/// Configuración del servidor HTTP/1.0 de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor HTTP/1.0 de archivos estáticos para Principios de Sistemas Operativos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    pub port: u16,

    /// Directorio raíz desde el que se sirven los archivos (document root)
    pub document_root: String,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Número de workers que atienden conexiones
    #[arg(long, default_value = "8", env = "HTTP_WORKERS")]
    pub workers: usize,

    /// Capacidad de la cola de conexiones aceptadas
    #[arg(long = "queue-capacity", default_value = "16", env = "HTTP_QUEUE_CAPACITY")]
    pub queue_capacity: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// Si la cantidad de argumentos es incorrecta, clap imprime el mensaje
    /// de uso y termina el proceso con estado distinto de cero antes de
    /// tocar la red.
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Workers must be >= 1".to_string());
        }

        if self.queue_capacity == 0 {
            return Err("Queue capacity must be >= 1".to_string());
        }

        if !Path::new(&self.document_root).is_dir() {
            return Err(format!(
                "Document root is not a directory: {}",
                self.document_root
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto (usada en tests)
    fn default() -> Self {
        Self {
            port: 8080,
            document_root: ".".to_string(),
            host: "127.0.0.1".to_string(),
            workers: 8,
            queue_capacity: 16,
        }
    }
}
