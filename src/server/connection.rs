//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Máquina de estados de una conexión:
//!
//! ```text
//! Receiving → Parsed|Rejected → Resolved → Responding → Closed
//! ```
//!
//! El worker dueño de la conexión lee la request completa, la parsea,
//! resuelve el path sobre el document root, elige exactamente un tipo de
//! respuesta y la envía. La conexión se cierra siempre al final (el drop
//! del `TcpStream`), haya salido bien o mal el envío. Cualquier error de
//! I/O es fatal para esta conexión, nunca para el proceso.

use crate::http::request::MAX_REQUEST_SIZE;
use crate::http::{response, ListingEntry, Request, ResponseKind};
use crate::resolver::{self, ResolvedTarget};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::Path;

/// Atiende una conexión de principio a fin
///
/// Una conexión que cierra sin enviar ningún byte se cierra en silencio;
/// cualquier otro contenido recibe exactamente una respuesta.
pub fn handle_connection(mut stream: TcpStream, root: &Path) -> std::io::Result<()> {
    let raw = read_request(&mut stream)?;

    if raw.is_empty() {
        return Ok(());
    }

    let kind = match Request::parse(&raw) {
        Ok(request) => {
            println!("   GET {}", request.path());
            classify(root, request.path())
        }
        Err(e) => {
            println!("   Request rechazada: {}", e);
            ResponseKind::BadRequest
        }
    };

    response::send(&mut stream, &kind)?;
    stream.flush()?;

    Ok(())
}

/// Lee la request acumulando hasta encontrar la línea en blanco terminal
///
/// Una request puede llegar repartida en varios segmentos TCP, así que se
/// lee en loop hasta ver `\r\n\r\n`, hasta que el peer cierre, o hasta
/// alcanzar [`MAX_REQUEST_SIZE`] bytes (lo que exceda se rechaza después
/// en el parser).
fn read_request(stream: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut raw = Vec::with_capacity(MAX_REQUEST_SIZE);
    let mut chunk = [0u8; 512];

    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }

        raw.extend_from_slice(&chunk[..bytes_read]);

        if raw.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }

        if raw.len() >= MAX_REQUEST_SIZE {
            break;
        }
    }

    Ok(raw)
}

/// Elige el tipo de respuesta para un path ya validado
fn classify(root: &Path, request_path: &str) -> ResponseKind {
    match resolver::resolve(root, request_path) {
        ResolvedTarget::Missing => ResponseKind::NotFound,
        ResolvedTarget::RegularFile(path) => ResponseKind::File(path),
        ResolvedTarget::DirectoryWithIndex(path) => ResponseKind::File(path),
        ResolvedTarget::Redirect(location) => ResponseKind::Redirect(location),
        ResolvedTarget::Directory(dir) => match list_directory(&dir) {
            Ok(entries) => ResponseKind::Listing {
                request_path: request_path.to_string(),
                entries,
            },
            Err(_) => ResponseKind::NotFound,
        },
    }
}

/// Lista las entradas de un directorio, ordenadas por nombre
///
/// El orden de `read_dir` no está especificado; se ordena para que la misma
/// request produzca siempre la misma página.
fn list_directory(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        entries.push(ListingEntry { name, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
