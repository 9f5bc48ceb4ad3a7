//! Servicios transversales

pub mod excel_service;
