//! The result sink seam and the in-memory implementation.

use crate::correlator::Correlator;
use indexmap::IndexMap;
use weft_core::ContractionError;

/// Accepts the labeled correlators produced by one contraction run.
///
/// The pipeline calls `emit` exactly once per successful run, with
/// both diagram correlators; a failed run never reaches the sink.
/// Persistence format and location are the implementation's concern.
pub trait ResultSink {
    /// Persist `correlators` under the caller-specified `output`
    /// identifier.
    fn emit(&mut self, output: &str, correlators: &[Correlator]) -> Result<(), ContractionError>;
}

/// Result sink keeping every emitted run in memory.
///
/// Runs are keyed by output identifier in emission order; re-emitting
/// under an existing identifier replaces the previous run.
#[derive(Debug, Default)]
pub struct MemorySink {
    runs: IndexMap<String, Vec<Correlator>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The correlators emitted under `output`, if any.
    pub fn run(&self, output: &str) -> Option<&[Correlator]> {
        self.runs.get(output).map(Vec::as_slice)
    }

    /// Output identifiers in emission order.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.runs.keys().map(String::as_str)
    }

    /// Number of stored runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// `true` if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl ResultSink for MemorySink {
    fn emit(&mut self, output: &str, correlators: &[Correlator]) -> Result<(), ContractionError> {
        self.runs.insert(output.to_owned(), correlators.to_vec());
        Ok(())
    }
}
