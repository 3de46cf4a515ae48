use crate::error::DriftError;
use crate::types::Task;

/// Text-transformation contract for the generative summarization service.
///
/// The core treats both inputs and outputs as opaque text.
pub trait Summarizer {
    /// Produce a new rolling summary from the composed context
    fn summarize(&self, context: &str) -> Result<String, DriftError>;

    /// Extract actionable tasks from the context.
    ///
    /// Adapters return an empty list rather than fail when the upstream
    /// output is malformed.
    fn extract_tasks(&self, context: &str) -> Result<Vec<Task>, DriftError>;
}
