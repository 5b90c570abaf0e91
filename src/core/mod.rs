pub mod coerce;
pub mod csv_to_json;
pub mod json_to_csv;

pub use crate::domain::model::{Document, Table};
pub use crate::utils::error::Result;

use crate::config::Mode;
use crate::utils::error::ConvertError;
use std::fs;
use std::io;
use std::path::Path;

/// Run one conversion, selected by mode. Failures come back as values;
/// the process exit lives with the caller.
pub fn run(mode: Mode, input: &Path, output: &Path) -> Result<()> {
    tracing::info!(
        "Converting {} -> {} ({:?})",
        input.display(),
        output.display(),
        mode
    );
    match mode {
        Mode::Csv2json => csv_to_json::convert(input, output),
        Mode::Json2csv => json_to_csv::convert(input, output),
    }
}

/// Read the whole input file up front; both directions transform in memory.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::IoError(e),
    })
}
