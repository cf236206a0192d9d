// ---------------------------------------------------------------------------
// EngineError: typed errors for the workbench / engine boundary
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while talking to the valuation engine or preparing
/// a request for it.
///
/// None of these are fatal: the UI stays interactive after any of them, and
/// nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The material catalog could not be fetched (transport failure or a
    /// non-success status). Selectors stay empty until the app restarts.
    CatalogUnavailable(String),
    /// A compute submission was attempted before both material slots were
    /// filled. Blocks the submission; no network call is made.
    IncompleteSelection,
    /// The compute call failed, either at the transport level or with an
    /// engine-reported error message.
    ComputeFailed(String),
    /// The engine returned a cost breakdown that does not open with the
    /// "Base Price" anchor entry. A contract violation on the engine side:
    /// surfaced as a hard error instead of rendering a wrong chart.
    MalformedBreakdown(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::CatalogUnavailable(msg) => {
                write!(f, "Material catalog unavailable: {msg}")
            }
            EngineError::IncompleteSelection => {
                write!(f, "Select two materials to compare before computing")
            }
            EngineError::ComputeFailed(msg) => write!(f, "Computation failed: {msg}"),
            EngineError::MalformedBreakdown(msg) => {
                write!(f, "Engine returned a malformed cost breakdown: {msg}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_engine_message() {
        let err = EngineError::ComputeFailed("Calculation failed: bad blend".to_string());
        assert!(err.to_string().contains("bad blend"));
    }

    #[test]
    fn test_incomplete_selection_is_user_actionable() {
        let msg = EngineError::IncompleteSelection.to_string();
        assert!(msg.contains("two materials"));
    }
}
