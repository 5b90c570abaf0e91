use crate::core::read_input;
use crate::domain::model::Table;
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Build a table from a parsed JSON document array.
///
/// The header is the key order of the first object; every later object must
/// carry the full header key set or the conversion fails. Values are
/// rendered back to text as-is, with no re-coercion in this direction.
pub fn table_from_documents(value: &Value) -> Result<Table> {
    let documents = match value {
        Value::Array(items) => items,
        _ => return Err(ConvertError::ShapeError),
    };

    let Some(first) = documents.first() else {
        return Ok(Table::default());
    };
    let first = first.as_object().ok_or(ConvertError::ShapeError)?;
    let header: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(documents.len());
    for (idx, document) in documents.iter().enumerate() {
        let object = document.as_object().ok_or(ConvertError::ShapeError)?;

        let mut row = Vec::with_capacity(header.len());
        for key in &header {
            let value = object.get(key).ok_or_else(|| ConvertError::MissingKey {
                key: key.clone(),
                row: idx,
            })?;
            row.push(render_cell(value));
        }
        rows.push(row);
    }

    Ok(Table { header, rows })
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        nested => nested.to_string(),
    }
}

fn table_to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    // An empty table means an empty output file, not a lone header line.
    if !table.header.is_empty() {
        wtr.write_record(&table.header)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()).into())
}

/// Convert a JSON array-of-objects file into CSV.
///
/// Like the CSV-to-JSON direction, the full output is built in memory
/// first; shape and missing-key failures happen before any write.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let value: Value = serde_json::from_str(&raw)?;

    let table = table_from_documents(&value)?;
    tracing::info!("Parsed {} records from {}", table.rows.len(), input.display());

    let data = table_to_csv_bytes(&table)?;
    fs::write(output, data)?;
    Ok(())
}
