use crate::core::coerce::coerce;
use crate::core::read_input;
use crate::domain::model::Document;
use crate::utils::error::Result;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Key under which fields beyond the header width are collected, as an
/// array of raw (uncoerced) strings.
pub const EXTRA_FIELDS_KEY: &str = "_extra";

/// Parse CSV into an ordered list of documents, one per data row.
///
/// The first record is the header. Rows shorter than the header are padded
/// with empty strings; rows longer than the header keep the surplus fields
/// under [`EXTRA_FIELDS_KEY`]. Every in-header cell goes through
/// [`coerce`], so `42` lands as a JSON integer and `9.5` as a float.
pub fn documents_from_csv<R: Read>(reader: R) -> Result<Vec<Document>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    tracing::debug!("CSV header: {:?}", header);

    let mut documents = Vec::new();
    for record in rdr.records() {
        let record = record?;

        let mut doc = Document::new();
        for (i, name) in header.iter().enumerate() {
            let cell = record.get(i).unwrap_or("");
            doc.insert(name.clone(), coerce(cell).into());
        }

        if record.len() > header.len() {
            let extras: Vec<Value> = record
                .iter()
                .skip(header.len())
                .map(|cell| Value::String(cell.to_string()))
                .collect();
            doc.insert(EXTRA_FIELDS_KEY.to_string(), Value::Array(extras));
        }

        documents.push(doc);
    }

    Ok(documents)
}

/// Convert a CSV file into a pretty-printed JSON array of objects.
///
/// The whole output is rendered in memory before the first byte is written,
/// so a parse failure leaves no partial file behind.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let documents = documents_from_csv(raw.as_bytes())?;
    tracing::info!("Parsed {} records from {}", documents.len(), input.display());

    let json = serde_json::to_vec_pretty(&documents)?;
    fs::write(output, json)?;
    Ok(())
}
