//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y JWT compartidas por el resto de la aplicación.

pub mod errors;
pub mod jwt;
pub mod validation;
