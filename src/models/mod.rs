//! Modelos del dominio
//!
//! Cada módulo contiene el struct que mapea la tabla PostgreSQL y los
//! requests de creación/actualización con sus reglas de validación.

pub mod client;
pub mod common;
pub mod contract;
pub mod disposal;
pub mod insurance;
pub mod lookup;
pub mod maintenance;
pub mod rental;
pub mod report;
pub mod supplier;
pub mod user;
pub mod vehicle;
pub mod vehicle_records;
