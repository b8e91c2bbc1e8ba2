use std::fmt::{self, Display};

/// Enum representing the possible errors surfaced by the map engine.
///
/// The possible errors are:
///
/// - `InvalidDataset`: the boundary dataset could not be parsed.
/// - `StatusSource`: the external status source failed to fetch or update.
///
/// No engine error is fatal to the map: an invalid dataset leaves the map
/// empty but interactive, and a failed status fetch keeps the previous table.
#[derive(Debug, PartialEq)]
pub enum EngineError {
    InvalidDataset(String),
    StatusSource(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDataset(msg) => {
                write!(f, "[InvalidDataset]: Could not parse the boundary dataset: {}", msg)
            }
            EngineError::StatusSource(msg) => {
                write!(f, "[StatusSource]: The status source failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for EngineError {}
