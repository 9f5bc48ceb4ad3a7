//! Importación masiva de vehículos desde Excel
//!
//! Solo el número de chasis es obligatorio en la plantilla. Las filas sin
//! matrícula se importan como borrador con una matrícula provisional
//! derivada del chasis. Las filas rechazadas se devuelven en un reporte
//! xlsx codificado en base64 dentro de la respuesta JSON.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::{info, warn};
use validator::Validate;

use crate::models::vehicle::CreateVehicleRequest;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::excel_service::{self, ColumnSpec, RowError};
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date;

/// Columnas de la plantilla de importación
pub const IMPORT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { header: "plate_number", required: false, hint: "Registration plate, e.g. 34 ABC 123" },
    ColumnSpec { header: "chassis_number", required: true, hint: "VIN, 5-30 characters" },
    ColumnSpec { header: "engine_number", required: false, hint: "Engine serial number" },
    ColumnSpec { header: "brand_id", required: false, hint: "Brand id from /api/brands" },
    ColumnSpec { header: "model_id", required: false, hint: "Model id from /api/models" },
    ColumnSpec { header: "vehicle_type_id", required: false, hint: "Vehicle type id" },
    ColumnSpec { header: "fuel_type_id", required: false, hint: "Fuel type id" },
    ColumnSpec { header: "transmission_id", required: false, hint: "Transmission id" },
    ColumnSpec { header: "color_id", required: false, hint: "Color id" },
    ColumnSpec { header: "branch_id", required: false, hint: "Branch id" },
    ColumnSpec { header: "model_year", required: false, hint: "Between 1900 and 2100" },
    ColumnSpec { header: "km", required: false, hint: "Current odometer reading" },
    ColumnSpec { header: "registration_date", required: false, hint: "YYYY-MM-DD" },
];

const EXAMPLE_ROW: &[&str] = &[
    "34 ABC 123",
    "WBA1234567ABCDEFG",
    "ENG-001",
    "1",
    "1",
    "1",
    "1",
    "1",
    "1",
    "1",
    "2022",
    "45000",
    "2022-06-15",
];

/// Resumen de una importación
#[derive(Debug, serde::Serialize)]
pub struct ImportSummary {
    pub message: String,
    pub inserted: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_report: Option<ErrorReportFile>,
}

/// Reporte de errores adjunto a la respuesta
#[derive(Debug, serde::Serialize)]
pub struct ErrorReportFile {
    pub filename: String,
    pub content_base64: String,
}

pub struct VehicleImportController {
    repository: VehicleRepository,
}

impl VehicleImportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub fn download_template() -> Result<Vec<u8>, AppError> {
        excel_service::generate_template("Vehicles", IMPORT_COLUMNS, EXAMPLE_ROW)
    }

    pub async fn import(&self, file_bytes: &[u8]) -> Result<ImportSummary, AppError> {
        let sheet = excel_service::parse_upload(file_bytes)?;

        if sheet.rows.is_empty() {
            return Err(AppError::BadRequest(
                "The uploaded file contains no data rows".to_string(),
            ));
        }

        let mut inserted = 0usize;
        let mut errors: Vec<RowError> = Vec::new();

        for (row_number, values) in &sheet.rows {
            let mut messages = excel_service::check_required_fields(values, IMPORT_COLUMNS);

            let request = match build_request(values) {
                Ok(request) => request,
                Err(parse_messages) => {
                    messages.extend(parse_messages);
                    errors.push(RowError {
                        row_number: *row_number,
                        messages,
                    });
                    continue;
                }
            };

            // la matrícula provisional de un borrador no pasa el formato
            // de matrícula, así que los borradores solo validan el chasis
            if request.is_draft {
                if let Some(ref chassis) = request.chassis_number {
                    if chassis.len() < 5 || chassis.len() > 30 {
                        messages.push("chassis number must have 5-30 characters".to_string());
                    }
                }
            } else if let Err(validation) = request.validate() {
                messages.extend(
                    validation
                        .field_errors()
                        .into_iter()
                        .flat_map(|(field, errs)| {
                            errs.iter().map(move |e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| format!("{} is invalid", field))
                            })
                        }),
                );
            }

            if !messages.is_empty() {
                errors.push(RowError {
                    row_number: *row_number,
                    messages,
                });
                continue;
            }

            if let Some(ref chassis) = request.chassis_number {
                if self.repository.chassis_number_exists(chassis, None).await? {
                    errors.push(RowError {
                        row_number: *row_number,
                        messages: vec![format!("Chassis number '{}' already exists", chassis)],
                    });
                    continue;
                }
            }

            match self.repository.create(&request).await {
                Ok(_) => inserted += 1,
                Err(e) => {
                    warn!("Import row {} failed: {}", row_number, e);
                    errors.push(RowError {
                        row_number: *row_number,
                        messages: vec![format!("Database error: {}", e)],
                    });
                }
            }
        }

        let error_report = if errors.is_empty() {
            None
        } else {
            let bytes = excel_service::generate_error_report(&errors)?;
            Some(ErrorReportFile {
                filename: format!(
                    "vehicle_import_errors_{}.xlsx",
                    Utc::now().format("%Y-%m-%d")
                ),
                content_base64: BASE64.encode(bytes),
            })
        };

        info!("📥 Vehicle import: {} inserted, {} failed", inserted, errors.len());

        Ok(ImportSummary {
            message: format!("{} vehicles imported", inserted),
            inserted,
            failed: errors.len(),
            error_report,
        })
    }

    /// Reporte xlsx a partir de las filas rechazadas de una importación previa
    pub fn error_report(errors: &[RowError]) -> Result<Vec<u8>, AppError> {
        excel_service::generate_error_report(errors)
    }
}

/// Construye el request de alta a partir de una fila de la hoja.
/// Sin matrícula la fila entra como borrador con matrícula provisional.
fn build_request(values: &HashMap<String, String>) -> Result<CreateVehicleRequest, Vec<String>> {
    let mut messages = Vec::new();

    let get = |key: &str| values.get(key).filter(|v| !v.is_empty()).cloned();

    let chassis_number = get("chassis_number");
    let plate_number = get("plate_number");
    let is_draft = plate_number.is_none();
    let plate_number = plate_number.unwrap_or_else(|| {
        format!(
            "DRAFT-{}",
            chassis_number.as_deref().unwrap_or_default()
        )
    });

    let parse_i32 = |key: &str, messages: &mut Vec<String>| -> Option<i32> {
        get(key).and_then(|v| match v.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                messages.push(format!("{} must be a number", key));
                None
            }
        })
    };
    let parse_i64 = |key: &str, messages: &mut Vec<String>| -> Option<i64> {
        get(key).and_then(|v| match v.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                messages.push(format!("{} must be a number", key));
                None
            }
        })
    };

    let brand_id = parse_i32("brand_id", &mut messages);
    let model_id = parse_i32("model_id", &mut messages);
    let vehicle_type_id = parse_i32("vehicle_type_id", &mut messages);
    let fuel_type_id = parse_i32("fuel_type_id", &mut messages);
    let transmission_id = parse_i32("transmission_id", &mut messages);
    let color_id = parse_i32("color_id", &mut messages);
    let branch_id = parse_i32("branch_id", &mut messages);
    let model_year = parse_i32("model_year", &mut messages);
    let km = parse_i64("km", &mut messages);

    let registration_date = match get("registration_date") {
        Some(raw) => match parse_date(&raw) {
            Ok(date) => Some(date),
            Err(e) => {
                messages.push(format!("registration_date: {}", e));
                None
            }
        },
        None => None,
    };

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(CreateVehicleRequest {
        plate_number,
        chassis_number,
        engine_number: get("engine_number"),
        brand_id,
        model_id,
        vehicle_type_id,
        fuel_type_id,
        transmission_id,
        color_id,
        branch_id,
        model_year,
        km,
        registration_date,
        insurance_expiry_date: None,
        inspection_expiry_date: None,
        acquisition_cost: None,
        current_status: None,
        current_client_company_id: None,
        is_draft,
        notes: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_row_builds_request() {
        let values = row(&[
            ("plate_number", "34 ABC 123"),
            ("chassis_number", "WBA1234567ABCDEFG"),
            ("brand_id", "3"),
            ("model_year", "2022"),
            ("km", "45000"),
            ("registration_date", "2022-06-15"),
        ]);

        let request = build_request(&values).unwrap();
        assert_eq!(request.plate_number, "34 ABC 123");
        assert_eq!(request.brand_id, Some(3));
        assert_eq!(request.km, Some(45000));
        assert!(!request.is_draft);
    }

    #[test]
    fn test_missing_plate_imports_as_draft() {
        let values = row(&[("chassis_number", "WBA1234567ABCDEFG")]);

        let request = build_request(&values).unwrap();
        assert!(request.is_draft);
        assert_eq!(request.plate_number, "DRAFT-WBA1234567ABCDEFG");
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let values = row(&[
            ("chassis_number", "WBA1234567ABCDEFG"),
            ("brand_id", "BMW"),
        ]);

        let messages = build_request(&values).unwrap_err();
        assert_eq!(messages, vec!["brand_id must be a number"]);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let values = row(&[
            ("chassis_number", "WBA1234567ABCDEFG"),
            ("registration_date", "15/06/2022"),
        ]);

        let messages = build_request(&values).unwrap_err();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("registration_date:"));
    }
}
