//! Capa de acceso a datos
//!
//! Cada repositorio envuelve el pool de PostgreSQL y expone operaciones
//! tipadas; los controladores nunca escriben SQL.

pub mod client_repository;
pub mod contract_repository;
pub mod disposal_repository;
pub mod insurance_repository;
pub mod lookup_repository;
pub mod maintenance_repository;
pub mod rental_repository;
pub mod report_repository;
pub mod supplier_repository;
pub mod user_repository;
pub mod vehicle_records_repository;
pub mod vehicle_repository;
