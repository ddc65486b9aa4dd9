use thiserror::Error;

/// Errors surfaced by document mutation entry points.
///
/// Unknown ids and locked targets are deliberately *not* errors: those
/// paths no-op (returning `false`/`None`) so repeated gestures stay
/// idempotent and a user's layer lock is honored without error plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A layer/document count limit was reached; the operation was aborted
    /// with no partial state change.
    #[error("capacity limit of {limit} {what} reached")]
    CapacityExceeded { what: &'static str, limit: usize },
}

impl EditorError {
    pub(crate) fn layer_capacity() -> Self {
        Self::CapacityExceeded {
            what: "layers",
            limit: crate::config::MAX_LAYERS,
        }
    }
}
