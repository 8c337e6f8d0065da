//! Form coordination errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures surfaced by form coordination.
///
/// Per-input validation failures are never errors: they are reported through the verdict and
/// the aggregate counters.
pub enum FormError {
    /// The form was cancelled without a cancel handler, an enclosing modal, or a navigation
    /// history to step back through.
    #[error(
        "navigation history is not available; cancelling a form without `on_cancel` or an \
         enclosing modal requires a history service (normally installed by the router)"
    )]
    HistoryUnavailable,
    /// The navigation history rejected the back request.
    #[error("navigation back failed: {0}")]
    Navigation(String),
    /// A serialized payload did not match the requested type.
    #[error("form payload could not be decoded: {0}")]
    Payload(String),
}
