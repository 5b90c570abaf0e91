use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Convert CSV to a JSON array of objects
    Csv2json,
    /// Convert a JSON array of objects to CSV
    Json2csv,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tabconv")]
#[command(about = "Convert tabular data between CSV and JSON")]
pub struct CliConfig {
    #[arg(value_enum)]
    pub mode: Mode,

    #[arg(short, long, help = "Input file path")]
    pub input: PathBuf,

    #[arg(short, long, help = "Output file path")]
    pub output: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input.to_string_lossy())?;
        validate_path("output", &self.output.to_string_lossy())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_ordinary_paths() {
        let config = CliConfig {
            mode: Mode::Csv2json,
            input: PathBuf::from("data.csv"),
            output: PathBuf::from("data.json"),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = CliConfig {
            mode: Mode::Json2csv,
            input: PathBuf::new(),
            output: PathBuf::from("out.csv"),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
