//! Error model shared across the fleet crates.

use thiserror::Error;

/// Result type used across the fleet crates.
pub type FleetResult<T> = Result<T, FleetError>;

/// Fleet-level error.
///
/// The vehicle model itself accepts every input; the only failure is the
/// output sink refusing a status line.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Writing a status line to the output sink failed.
    #[error("failed to write status line: {0}")]
    Output(#[from] std::io::Error),
}
