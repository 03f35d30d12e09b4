//! # Resolución de Paths
//! src/resolver.rs
//!
//! Este módulo mapea el path de una request ya validada sobre el namespace
//! del document root y lo clasifica en un [`ResolvedTarget`].
//!
//! ## Algoritmo
//!
//! 1. Rechazar segmentos `.` y `..` (una request nunca puede leer fuera
//!    del document root).
//! 2. Concatenar document root + path y consultar el filesystem.
//! 3. Entrada inexistente → `Missing`.
//! 4. Archivo regular → `RegularFile`.
//! 5. Directorio pedido sin `/` final → `Redirect` a la forma canónica
//!    con `/` (el caller emite un 301).
//! 6. Directorio con `/` final: si contiene `index.html` regular →
//!    `DirectoryWithIndex`; si no → `Directory` (listado generado).

use std::fs;
use std::path::{Path, PathBuf};

/// Resultado de resolver un path de request contra el document root
///
/// Se deriva determinísticamente del path y del estado del filesystem:
/// resolver dos veces la misma request sin cambios en disco produce el
/// mismo target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// La entrada no existe (o el path intenta escapar del root)
    Missing,

    /// Archivo regular listo para servir
    RegularFile(PathBuf),

    /// Directorio pedido sin `/` final: redirigir al path canónico
    Redirect(String),

    /// Directorio con un `index.html` regular adentro
    DirectoryWithIndex(PathBuf),

    /// Directorio sin índice: generar un listado
    Directory(PathBuf),
}

/// Resuelve un path de request (que comienza con "/") contra el root
pub fn resolve(root: &Path, request_path: &str) -> ResolvedTarget {
    // Neutralizar path traversal: cualquier segmento "." o ".." se trata
    // como inexistente
    if request_path.split('/').any(|segment| segment == "." || segment == "..") {
        return ResolvedTarget::Missing;
    }

    let fs_path = root.join(request_path.trim_start_matches('/'));

    let metadata = match fs::metadata(&fs_path) {
        Ok(metadata) => metadata,
        Err(_) => return ResolvedTarget::Missing,
    };

    if metadata.is_file() {
        return ResolvedTarget::RegularFile(fs_path);
    }

    if !request_path.ends_with('/') {
        return ResolvedTarget::Redirect(format!("{}/", request_path));
    }

    let index = fs_path.join("index.html");
    match fs::metadata(&index) {
        Ok(meta) if meta.is_file() => ResolvedTarget::DirectoryWithIndex(index),
        _ => ResolvedTarget::Directory(fs_path),
    }
}
