// Standard paths
use std::fs;

// External paths
use serde_json::Value;

// Crate paths
use crate::api::error::ComputeSalesError;

/// Loads one input file as a json array of loosely typed records.
/// The file handle is closed before the function returns, on error
/// paths included.
pub fn load_records(file: &str) -> Result<Vec<Value>, ComputeSalesError> {
    let content = fs::read_to_string(file)
        .map_err(|err| ComputeSalesError::CannotReadInputFile(file.to_string(), err))?;

    serde_json::from_str(&content)
        .map_err(|err| ComputeSalesError::CannotParseInputFile(file.to_string(), err))
}
