//! Back office de gestión de flota
//!
//! API REST sobre PostgreSQL: tablas de definición genéricas, recursos
//! operacionales (vehículos, clientes, proveedores, alquileres, seguros),
//! autenticación JWT con autorización por roles e importación masiva
//! desde Excel.

pub mod config;
pub mod controllers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
