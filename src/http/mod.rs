//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.0 que habla el servidor,
//! sin librerías de alto nivel:
//!
//! - Parsing estricto de requests GET contra una gramática anclada
//! - Construcción de responses y streaming del body al socket
//! - Manejo de status codes
//!
//! ## Formato de Request aceptado
//!
//! ```text
//! GET /ruta/archivo.txt HTTP/1.0\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! Cualquier request que no calce con la gramática completa (otro método,
//! caracteres fuera del alfabeto de paths, línea mal terminada) se rechaza
//! con `400 BAD REQUEST`.
//!
//! ## Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Length: 1234\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <body>
//! ```

pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, Request};
pub use response::{ListingEntry, Response, ResponseKind};
pub use status::StatusCode;
