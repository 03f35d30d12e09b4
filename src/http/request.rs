//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! Este módulo valida requests contra una gramática estricta y anclada:
//! la request completa debe calzar, no solo un prefijo.
//!
//! ```text
//! "GET" SP+ "/" PATHCHARS SP+ "HTTP/" DIGIT "." DIGIT CRLF
//! (HEADERNAME ":" SP+ HEADERVALUE CRLF)*
//! CRLF
//! ```
//!
//! donde `SP+` es uno o más espacios/tabs, `PATHCHARS` son segmentos de
//! `[A-Za-z0-9_.-]+` separados por `/`, y `HEADERNAME` es `[A-Za-z0-9-]+`.
//!
//! Solo se acepta el método `GET`; cualquier otro método es un fallo de
//! parsing (no existe un camino 405 separado). Los headers se validan contra
//! la gramática pero no se retienen: lo único que se extrae es el path y la
//! versión del protocolo.

use regex::Regex;
use std::sync::OnceLock;

/// Tamaño máximo de una request en bytes
pub const MAX_REQUEST_SIZE: usize = 2048;

/// Gramática completa de la request, anclada a inicio y fin del buffer
const REQUEST_PATTERN: &str = concat!(
    r"^GET[ \t]+(/(?:[A-Za-z0-9_.\-]+/?)*)[ \t]+HTTP/([0-9]\.[0-9])\r\n",
    r"(?:[A-Za-z0-9\-]+:[ \t]+[^\r\n]+\r\n)*",
    r"\r\n$",
);

fn request_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(REQUEST_PATTERN).expect("gramática de request inválida"))
}

/// Representa una request GET validada
///
/// El path se conserva tal cual llegó (sin URL-decoding); la resolución
/// sobre el filesystem es responsabilidad del módulo `resolver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path de la petición, siempre comienza con "/"
    path: String,

    /// Versión del protocolo (ej: "1.0")
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacía
    Empty,

    /// El buffer no es UTF-8 válido
    InvalidEncoding,

    /// La request no calza con la gramática (método distinto de GET,
    /// caracteres inválidos en el path, terminadores incorrectos, etc.)
    Malformed,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty request"),
            ParseError::InvalidEncoding => write!(f, "Request is not valid UTF-8"),
            ParseError::Malformed => write!(f, "Request does not match HTTP/1.0 GET grammar"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea una request HTTP/1.0 desde bytes
    ///
    /// Es total: para cualquier secuencia de bytes retorna `Ok` o `Err`,
    /// nunca entra en pánico ni se cuelga.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = b"GET /docs/file.txt HTTP/1.0\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/docs/file.txt");
    /// assert_eq!(request.version(), "1.0");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::Empty);
        }

        let text = std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidEncoding)?;

        let captures = request_regex()
            .captures(text)
            .ok_or(ParseError::Malformed)?;

        Ok(Request {
            path: captures[1].to_string(),
            version: captures[2].to_string(),
        })
    }

    /// Obtiene el path de la request (comienza con "/")
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión del protocolo (ej: "1.0")
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let request = Request::parse(b"GET / HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "1.0");
    }

    #[test]
    fn test_parse_nested_path() {
        let raw = b"GET /a/b.txt HTTP/1.1\r\nHost: x\r\n\r\n";
        let request = Request::parse(raw).unwrap();
        assert_eq!(request.path(), "/a/b.txt");
        assert_eq!(request.version(), "1.1");
    }

    #[test]
    fn test_parse_trailing_slash() {
        let request = Request::parse(b"GET /docs/ HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/docs/");
    }

    #[test]
    fn test_parse_no_trailing_slash() {
        let request = Request::parse(b"GET /a HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/a");
    }

    #[test]
    fn test_parse_multiple_headers() {
        let raw = b"GET /index.html HTTP/1.0\r\nHost: localhost:8080\r\nUser-Agent: test agent\r\n\r\n";
        let request = Request::parse(raw).unwrap();
        assert_eq!(request.path(), "/index.html");
    }

    #[test]
    fn test_parse_tabs_as_separator() {
        let request = Request::parse(b"GET\t/a.txt\tHTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/a.txt");
    }

    #[test]
    fn test_reject_post() {
        let result = Request::parse(b"POST / HTTP/1.0\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_lowercase_method() {
        // El método es case-sensitive
        let result = Request::parse(b"get / HTTP/1.0\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_missing_final_crlf() {
        let result = Request::parse(b"GET / HTTP/1.0\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_lf_only_terminators() {
        let result = Request::parse(b"GET / HTTP/1.0\n\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_path_without_leading_slash() {
        let result = Request::parse(b"GET index.html HTTP/1.0\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_invalid_path_chars() {
        let result = Request::parse(b"GET /a%20b HTTP/1.0\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_query_string() {
        // La gramática no admite query strings
        let result = Request::parse(b"GET /a?x=1 HTTP/1.0\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_malformed_header() {
        let result = Request::parse(b"GET / HTTP/1.0\r\nsin-dos-puntos\r\n\r\n");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_trailing_garbage() {
        // Match completo, no de prefijo
        let result = Request::parse(b"GET / HTTP/1.0\r\n\r\nextra");
        assert_eq!(result, Err(ParseError::Malformed));
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!(Request::parse(b""), Err(ParseError::Empty));
    }

    #[test]
    fn test_reject_non_utf8() {
        let result = Request::parse(&[0xff, 0xfe, 0x00]);
        assert_eq!(result, Err(ParseError::InvalidEncoding));
    }

    #[test]
    fn test_reject_binary_garbage() {
        let result = Request::parse(b"\x01\x02\x03garbage");
        assert!(result.is_err());
    }

    #[test]
    fn test_dotdot_segments_parse_ok() {
        // ".." es léxicamente válido en la gramática; lo neutraliza
        // el resolver, no el parser
        let request = Request::parse(b"GET /../secret HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/../secret");
    }
}
