//! Lógica de negocio
//!
//! Los controladores validan los requests, aplican las reglas de cada
//! recurso (unicidad, rangos de fechas, políticas de borrado) y delegan
//! el acceso a datos en los repositorios.

pub mod client_controller;
pub mod contract_controller;
pub mod disposal_controller;
pub mod insurance_controller;
pub mod lookup_controller;
pub mod maintenance_controller;
pub mod rental_controller;
pub mod report_controller;
pub mod supplier_controller;
pub mod user_controller;
pub mod vehicle_controller;
pub mod vehicle_import_controller;
pub mod vehicle_records_controller;
