//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP/1.0 que emite el servidor.
//! El servidor responde exactamente con uno de cuatro códigos:
//!
//! - **200 OK**: archivo servido o listado de directorio generado
//! - **301 Moved Permanently**: directorio pedido sin `/` final
//! - **400 BAD REQUEST**: la request no calza con la gramática
//! - **404 Not Found**: el recurso no existe bajo el document root

/// Códigos de estado que puede emitir el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 301 Moved Permanently - Redirección a la forma canónica del path
    MovedPermanently = 301,

    /// 400 Bad Request - Request malformada o método no soportado
    BadRequest = 400,

    /// 404 Not Found - Recurso no encontrado bajo el document root
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// El 400 se emite en mayúsculas (`BAD REQUEST`) para mantener el
    /// formato byte-exacto del protocolo de referencia.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::BadRequest.reason_phrase(), "BAD REQUEST");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "BAD REQUEST",
            StatusCode::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
