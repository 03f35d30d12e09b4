//! # Construcción y Envío de Responses HTTP/1.0
//! src/http/response.rs
//!
//! Este módulo construye los cinco tipos de respuesta que emite el servidor
//! y los escribe al socket:
//!
//! - `400 BAD REQUEST`: solo status line, sin body
//! - `404 Not Found`: página HTML fija
//! - `301 Moved Permanently`: header `Location`, sin body
//! - `200 OK` archivo: body streameado en chunks de 4096 bytes
//! - `200 OK` listado: página HTML generada en memoria
//!
//! ## Formato en el wire
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Length: 1234\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <body>
//! ```
//!
//! Los headers se guardan en un `Vec` ordenado (no un `HashMap`): responder
//! dos veces la misma request debe producir exactamente los mismos bytes.

use super::StatusCode;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Tamaño de chunk para streamear archivos al socket
pub const CHUNK_SIZE: usize = 4096;

/// Página fija que acompaña a los 404
const NOT_FOUND_BODY: &str = "<html><head><title>404 Not Found</title></head>\
<body><h1>404 Not Found</h1><p>The requested resource could not be found.</p></body></html>";

/// Tabla estática extensión (minúsculas) → MIME type
const MIME_TYPES: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("pdf", "application/pdf"),
    ("html", "text/html"),
    ("css", "text/css"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("jfif", "image/jpeg"),
    ("jif", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
];

/// Busca el MIME type para la extensión de un archivo
///
/// Extensiones no mapeadas retornan `None` (la respuesta simplemente
/// omite el `Content-Type`; no es un error).
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Una entrada de un listado de directorio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// El tipo de respuesta elegido para una request
///
/// Se elige exactamente uno por conexión: `BadRequest` si y solo si el
/// parsing falló; los demás requieren una request válida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    /// 400: la request no calza con la gramática
    BadRequest,

    /// 404: el recurso no existe
    NotFound,

    /// 301: redirigir al path canónico con `/` final
    Redirect(String),

    /// 200: servir el archivo streameado desde disco
    File(PathBuf),

    /// 200: listado HTML del directorio
    Listing {
        request_path: String,
        entries: Vec<ListingEntry>,
    },
}

/// Cabecera de una respuesta HTTP/1.0 (status line + headers + body opcional)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header, preservando el orden de inserción
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Establece el body y agrega su `Content-Length` en bytes
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self.headers
            .push(("Content-Length".to_string(), self.body.len().to_string()));
        self
    }

    /// Respuesta 400: solo la status line
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest)
    }

    /// Respuesta 404 con la página HTML fija
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_header("Content-Type", "text/html")
            .with_body(NOT_FOUND_BODY)
    }

    /// Respuesta 301 hacia el path canónico
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::MovedPermanently).with_header("Location", location)
    }

    /// Respuesta 200 con el listado HTML de un directorio
    ///
    /// Los directorios se renderizan con `/` final tanto en el target del
    /// link como en la etiqueta. El body se genera completo en memoria
    /// (los listados son pequeños) y el `Content-Length` se calcula después.
    pub fn listing(request_path: &str, entries: &[ListingEntry]) -> Self {
        let mut body = String::new();
        body.push_str("<html><head><title>Index of ");
        body.push_str(request_path);
        body.push_str("</title></head><body><h1>Index of ");
        body.push_str(request_path);
        body.push_str("</h1><ul>\n");

        for entry in entries {
            let label = if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };
            body.push_str(&format!("<li><a href=\"{}\">{}</a></li>\n", label, label));
        }

        body.push_str("</ul></body></html>\n");

        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html")
            .with_body(&body)
    }

    /// Convierte la respuesta a bytes listos para el socket
    ///
    /// Formato: status line, headers en orden de inserción, línea vacía,
    /// body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene el body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Escribe una respuesta completa al stream
///
/// Para `File`, la cabecera lleva el tamaño exacto del archivo y el body se
/// streamea en chunks de [`CHUNK_SIZE`] bytes, nunca se bufferea entero en
/// memoria. `write_all` reintenta los sends parciales hasta transmitir todo
/// el payload o encontrar un error fatal del stream.
///
/// Un error de I/O acá es fatal solo para esta conexión: el caller lo
/// loguea, el stream se cierra y el proceso sigue sirviendo.
pub fn send<W: Write>(stream: &mut W, kind: &ResponseKind) -> std::io::Result<()> {
    match kind {
        ResponseKind::BadRequest => stream.write_all(&Response::bad_request().to_bytes()),
        ResponseKind::NotFound => stream.write_all(&Response::not_found().to_bytes()),
        ResponseKind::Redirect(location) => {
            stream.write_all(&Response::redirect(location).to_bytes())
        }
        ResponseKind::File(path) => send_file(stream, path),
        ResponseKind::Listing {
            request_path,
            entries,
        } => stream.write_all(&Response::listing(request_path, entries).to_bytes()),
    }
}

/// Streamea un archivo: cabecera con `Content-Length` exacto y body en chunks
///
/// Si el archivo desapareció entre la resolución y la apertura, se degrada
/// a un 404 en vez de dejar la conexión sin respuesta.
fn send_file<W: Write>(stream: &mut W, path: &Path) -> std::io::Result<()> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return stream.write_all(&Response::not_found().to_bytes()),
    };

    let length = file.metadata()?.len();

    let mut head = Response::new(StatusCode::Ok).with_header("Content-Length", &length.to_string());
    if let Some(mime) = content_type_for(path) {
        head = head.with_header("Content-Type", mime);
    }
    stream.write_all(&head.to_bytes())?;

    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let bytes_read = file.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        stream.write_all(&chunk[..bytes_read])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_bad_request_bytes() {
        let bytes = Response::bad_request().to_bytes();
        assert_eq!(bytes, b"HTTP/1.0 400 BAD REQUEST\r\n\r\n");
    }

    #[test]
    fn test_not_found_bytes() {
        let bytes = Response::not_found().to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.0 404 Not Found\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains(&format!("Content-Length: {}\r\n", NOT_FOUND_BODY.len())));
        assert!(text.ends_with(NOT_FOUND_BODY));
    }

    #[test]
    fn test_redirect_bytes() {
        let bytes = Response::redirect("/docs/").to_bytes();
        assert_eq!(
            bytes,
            b"HTTP/1.0 301 Moved Permanently\r\nLocation: /docs/\r\n\r\n"
        );
    }

    #[test]
    fn test_listing_entries() {
        let entries = vec![
            ListingEntry {
                name: "docs".to_string(),
                is_dir: true,
            },
            ListingEntry {
                name: "file.txt".to_string(),
                is_dir: false,
            },
        ];

        let response = Response::listing("/www/", &entries);
        let body = String::from_utf8(response.body().to_vec()).unwrap();

        // Directorios con "/" final en target y etiqueta
        assert!(body.contains("<li><a href=\"docs/\">docs/</a></li>"));
        assert!(body.contains("<li><a href=\"file.txt\">file.txt</a></li>"));
        assert!(body.contains("Index of /www/"));
    }

    #[test]
    fn test_listing_content_length_matches_body() {
        let entries = vec![ListingEntry {
            name: "a.txt".to_string(),
            is_dir: false,
        }];
        let response = Response::listing("/", &entries);

        let length: usize = response
            .headers()
            .iter()
            .find(|(name, _)| name == "Content-Length")
            .map(|(_, value)| value.parse().unwrap())
            .unwrap();
        assert_eq!(length, response.body().len());
    }

    #[test]
    fn test_header_order_is_deterministic() {
        let first = Response::not_found().to_bytes();
        let second = Response::not_found().to_bytes();
        assert_eq!(first, second);
    }

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type_for(Path::new("a.txt")), Some("text/plain"));
        assert_eq!(content_type_for(Path::new("a.pdf")), Some("application/pdf"));
        assert_eq!(content_type_for(Path::new("a.html")), Some("text/html"));
        assert_eq!(content_type_for(Path::new("a.css")), Some("text/css"));
        assert_eq!(content_type_for(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(content_type_for(Path::new("a.jfif")), Some("image/jpeg"));
        assert_eq!(content_type_for(Path::new("a.png")), Some("image/png"));
        assert_eq!(content_type_for(Path::new("a.gif")), Some("image/gif"));
    }

    #[test]
    fn test_content_type_case_insensitive() {
        assert_eq!(content_type_for(Path::new("A.TXT")), Some("text/plain"));
        assert_eq!(content_type_for(Path::new("foto.JPeG")), Some("image/jpeg"));
    }

    #[test]
    fn test_content_type_unknown_extension() {
        assert_eq!(content_type_for(Path::new("a.xyz")), None);
        assert_eq!(content_type_for(Path::new("sin_extension")), None);
    }

    #[test]
    fn test_send_file_streams_exact_bytes() {
        // Archivo más grande que un chunk para forzar varios writes
        let contents: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let path = std::env::temp_dir().join(format!(
            "file_server_response_stream_{}.bin",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(&contents).unwrap();
        drop(file);

        let mut wire: Vec<u8> = Vec::new();
        send(&mut wire, &ResponseKind::File(path.clone())).unwrap();

        let text_head = String::from_utf8_lossy(&wire);
        assert!(text_head.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text_head.contains("Content-Length: 10000\r\n"));

        // El body concatenado es byte-idéntico al archivo fuente
        let separator = wire.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
        assert_eq!(&wire[separator + 4..], &contents[..]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_send_file_missing_degrades_to_not_found() {
        let mut wire: Vec<u8> = Vec::new();
        let path = PathBuf::from("/no/existe/archivo.txt");
        send(&mut wire, &ResponseKind::File(path)).unwrap();

        assert!(String::from_utf8_lossy(&wire).starts_with("HTTP/1.0 404 Not Found\r\n"));
    }

    #[test]
    fn test_send_file_without_content_type() {
        let path = std::env::temp_dir().join(format!(
            "file_server_response_noext_{}.dat",
            std::process::id()
        ));
        std::fs::write(&path, b"datos").unwrap();

        let mut wire: Vec<u8> = Vec::new();
        send(&mut wire, &ResponseKind::File(path.clone())).unwrap();

        let text = String::from_utf8_lossy(&wire);
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(!text.contains("Content-Type"));

        std::fs::remove_file(path).ok();
    }
}
