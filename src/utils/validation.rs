//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! compartidas entre los DTOs y el servicio de importación Excel.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Matrículas tipo "34ABC123": 1-3 dígitos de provincia, letras y número
    pub static ref PLATE_NUMBER_RE: Regex =
        Regex::new(r"^[0-9]{1,3}\s?[A-Z]{1,3}\s?[0-9]{2,5}$").unwrap();
}

/// Validar formato de matrícula (usada con `#[validate(custom = ...)]`)
pub fn validate_plate_number(value: &str) -> Result<(), ValidationError> {
    let normalized = value.trim().to_uppercase();
    if !PLATE_NUMBER_RE.is_match(&normalized) {
        let mut error = ValidationError::new("plate_number");
        error.message = Some("plate number format is invalid".into());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a valid date (expected YYYY-MM-DD)", value))
}

/// Validar año de modelo de vehículo
pub fn validate_model_year(value: i32) -> Result<(), ValidationError> {
    if !(1900..=2100).contains(&value) {
        let mut error = ValidationError::new("model_year");
        error.message = Some("model year must be between 1900 and 2100".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plate_number() {
        assert!(validate_plate_number("34ABC123").is_ok());
        assert!(validate_plate_number("06 A 1234").is_ok());
        assert!(validate_plate_number("not-a-plate").is_err());
        assert!(validate_plate_number("").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("2024/01/15").is_err());
        assert!(parse_date("15-01-2024").is_err());
    }

    #[test]
    fn test_validate_model_year() {
        assert!(validate_model_year(2022).is_ok());
        assert!(validate_model_year(1850).is_err());
        assert!(validate_model_year(2150).is_err());
    }
}
