//! Common API related to errors fatal to the whole run

// Standard paths
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ComputeSalesError {
    CannotReadInputFile(String, io::Error),
    CannotParseInputFile(String, serde_json::Error),
    CannotWriteResultsFile(String, io::Error),
}

// Add empty Error trait
impl error::Error for ComputeSalesError {}

fn desc(error: &ComputeSalesError) -> String {
    use self::ComputeSalesError::*;
    match *error {
        CannotReadInputFile(ref file, ref err) => {
            format!("cannot read input file: {}, reason: {}", file, err)
        }
        CannotParseInputFile(ref file, ref err) => format!(
            "invalid json format in input file: {}, reason: {}",
            file, err
        ),
        CannotWriteResultsFile(ref file, ref err) => {
            format!("cannot write results file: {}, reason: {}", file, err)
        }
    }
}

// Implement Display trait
impl fmt::Display for ComputeSalesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", desc(&self))
    }
}
