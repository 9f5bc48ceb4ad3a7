//! Servicio de Excel: plantillas de importación, lectura de ficheros
//! subidos y reporte de errores.
//!
//! La lectura usa calamine (xlsx/xls); la escritura rust_xlsxwriter.
//! Las filas se devuelven como mapas header -> valor textual; el parseo
//! tipado ocurre en el controlador de cada recurso.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};

use crate::utils::errors::AppError;

/// Columna de una plantilla de importación
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub required: bool,
    pub hint: &'static str,
}

/// Fila rechazada durante la importación, con sus mensajes
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RowError {
    pub row_number: u32,
    pub messages: Vec<String>,
}

/// Contenido de la primera hoja de un fichero subido.
/// `rows` conserva el número de fila original (1-based, incluyendo cabecera).
#[derive(Debug)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<(u32, HashMap<String, String>)>,
}

/// Genera una plantilla xlsx: hoja de datos con cabeceras en negrita y una
/// fila de ejemplo, más una hoja de ayuda con la descripción de cada columna.
pub fn generate_template(
    sheet_name: &str,
    columns: &[ColumnSpec],
    example_row: &[&str],
) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| AppError::Excel(e.to_string()))?;

    for (col, spec) in columns.iter().enumerate() {
        let header = if spec.required {
            format!("{} *", spec.header)
        } else {
            spec.header.to_string()
        };
        worksheet
            .write_string_with_format(0, col as u16, &header, &bold)
            .map_err(|e| AppError::Excel(e.to_string()))?;
        worksheet
            .set_column_width(col as u16, 18)
            .map_err(|e| AppError::Excel(e.to_string()))?;
    }

    for (col, value) in example_row.iter().enumerate() {
        worksheet
            .write_string(1, col as u16, *value)
            .map_err(|e| AppError::Excel(e.to_string()))?;
    }

    let help = workbook.add_worksheet();
    help.set_name("Help")
        .map_err(|e| AppError::Excel(e.to_string()))?;
    help.write_string_with_format(0, 0, "Column", &bold)
        .map_err(|e| AppError::Excel(e.to_string()))?;
    help.write_string_with_format(0, 1, "Required", &bold)
        .map_err(|e| AppError::Excel(e.to_string()))?;
    help.write_string_with_format(0, 2, "Description", &bold)
        .map_err(|e| AppError::Excel(e.to_string()))?;
    for (row, spec) in columns.iter().enumerate() {
        let row = (row + 1) as u32;
        help.write_string(row, 0, spec.header)
            .map_err(|e| AppError::Excel(e.to_string()))?;
        help.write_string(row, 1, if spec.required { "yes" } else { "no" })
            .map_err(|e| AppError::Excel(e.to_string()))?;
        help.write_string(row, 2, spec.hint)
            .map_err(|e| AppError::Excel(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Excel(e.to_string()))
}

/// Lee la primera hoja de un xlsx/xls subido. Las cabeceras se normalizan
/// quitando el marcador de obligatoriedad (` *`) y espacios.
pub fn parse_upload(bytes: &[u8]) -> Result<ParsedSheet, AppError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::Excel(format!("Could not read workbook: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Excel("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Excel(format!("Could not read sheet: {}", e)))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_to_string(cell).trim_end_matches(" *").trim().to_string())
            .collect(),
        None => return Ok(ParsedSheet {
            headers: Vec::new(),
            rows: Vec::new(),
        }),
    };

    let mut rows = Vec::new();
    for (index, row) in rows_iter.enumerate() {
        // fila 1 es la cabecera
        let row_number = (index + 2) as u32;

        let mut values = HashMap::new();
        let mut has_content = false;
        for (col, cell) in row.iter().enumerate() {
            let Some(header) = headers.get(col) else {
                continue;
            };
            let value = cell_to_string(cell).trim().to_string();
            if !value.is_empty() {
                has_content = true;
            }
            values.insert(header.clone(), value);
        }

        // las filas totalmente vacías se ignoran
        if has_content {
            rows.push((row_number, values));
        }
    }

    Ok(ParsedSheet { headers, rows })
}

/// Valida la presencia de los campos obligatorios de una fila
pub fn check_required_fields(
    row: &HashMap<String, String>,
    columns: &[ColumnSpec],
) -> Vec<String> {
    columns
        .iter()
        .filter(|spec| spec.required)
        .filter(|spec| row.get(spec.header).map(|v| v.is_empty()).unwrap_or(true))
        .map(|spec| format!("{} is required", spec.header))
        .collect()
}

/// Genera el xlsx de reporte con las filas rechazadas
pub fn generate_error_report(errors: &[RowError]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Errors")
        .map_err(|e| AppError::Excel(e.to_string()))?;
    worksheet
        .write_string_with_format(0, 0, "Row", &bold)
        .map_err(|e| AppError::Excel(e.to_string()))?;
    worksheet
        .write_string_with_format(0, 1, "Errors", &bold)
        .map_err(|e| AppError::Excel(e.to_string()))?;

    for (index, error) in errors.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet
            .write_number(row, 0, error.row_number as f64)
            .map_err(|e| AppError::Excel(e.to_string()))?;
        worksheet
            .write_string(row, 1, &error.messages.join("; "))
            .map_err(|e| AppError::Excel(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Excel(e.to_string()))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.date().to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnSpec] = &[
        ColumnSpec {
            header: "plate_number",
            required: false,
            hint: "Registration plate",
        },
        ColumnSpec {
            header: "chassis_number",
            required: true,
            hint: "VIN, 5-30 characters",
        },
    ];

    #[test]
    fn test_template_round_trip() {
        let bytes = generate_template("Vehicles", COLUMNS, &["34 ABC 123", "VIN0001"]).unwrap();
        let parsed = parse_upload(&bytes).unwrap();

        assert_eq!(parsed.headers, vec!["plate_number", "chassis_number"]);
        assert_eq!(parsed.rows.len(), 1);

        let (row_number, values) = &parsed.rows[0];
        assert_eq!(*row_number, 2);
        assert_eq!(values.get("plate_number").unwrap(), "34 ABC 123");
        assert_eq!(values.get("chassis_number").unwrap(), "VIN0001");
    }

    #[test]
    fn test_empty_template_has_example_row_only() {
        let bytes = generate_template("Vehicles", COLUMNS, &[]).unwrap();
        let parsed = parse_upload(&bytes).unwrap();

        assert_eq!(parsed.headers.len(), 2);
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let mut row = HashMap::new();
        row.insert("plate_number".to_string(), "34 ABC 123".to_string());
        row.insert("chassis_number".to_string(), String::new());

        let messages = check_required_fields(&row, COLUMNS);
        assert_eq!(messages, vec!["chassis_number is required"]);
    }

    #[test]
    fn test_present_required_field_passes() {
        let mut row = HashMap::new();
        row.insert("chassis_number".to_string(), "VIN0001".to_string());

        assert!(check_required_fields(&row, COLUMNS).is_empty());
    }

    #[test]
    fn test_error_report_is_readable() {
        let errors = vec![RowError {
            row_number: 3,
            messages: vec!["chassis_number is required".to_string()],
        }];

        let bytes = generate_error_report(&errors).unwrap();
        let parsed = parse_upload(&bytes).unwrap();

        assert_eq!(parsed.headers, vec!["Row", "Errors"]);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].1.get("Row").unwrap(), "3");
    }
}
