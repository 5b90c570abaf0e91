pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Mode};
pub use domain::model::{Document, Table};
pub use utils::error::{ConvertError, Result};
