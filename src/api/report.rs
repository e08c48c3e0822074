// Standard paths
use std::fmt;
use std::fs;
use std::time::Duration;

// Crate paths
use crate::api::error::ComputeSalesError;

pub const RESULTS_FILE: &str = "SalesResults.txt";

/// Outcome of a run: the grand total and how long the computation
/// itself took, loading and reporting excluded.
pub struct Report {
    total_cost: f64,
    elapsed: Duration,
}

impl Report {
    pub fn new(total_cost: f64, elapsed: Duration) -> Self {
        Report {
            total_cost,
            elapsed,
        }
    }

    pub fn total_line(&self) -> String {
        format!("Total Cost: ${:.2}", self.total_cost)
    }

    pub fn execution_line(&self) -> String {
        format!("Execution Time: {:.2} seconds", self.elapsed.as_secs_f64())
    }

    /// Overwrites the results file in the working directory, previous
    /// runs are not kept.
    pub fn save(&self) -> Result<(), ComputeSalesError> {
        fs::write(RESULTS_FILE, self.to_string())
            .map_err(|err| ComputeSalesError::CannotWriteResultsFile(RESULTS_FILE.to_string(), err))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.total_line())?;
        writeln!(f, "{}", self.execution_line())
    }
}
