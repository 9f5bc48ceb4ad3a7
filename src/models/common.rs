//! Tipos de respuesta compartidos por todos los recursos

use serde::Serialize;

/// Metadatos de paginación
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Listado paginado `{data, meta}`
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

/// Respuesta uniforme de DELETE: 200 con la fila eliminada
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T> {
    pub message: String,
    pub deleted: T,
}

impl<T> DeletedResponse<T> {
    pub fn new(entity: &str, deleted: T) -> Self {
        Self {
            message: format!("{} deleted", entity),
            deleted,
        }
    }
}
