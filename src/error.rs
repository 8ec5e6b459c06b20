//! Error types for dropdown operations.

/// Error type for dropdown operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    /// A selection was committed while no row was preselected.
    #[error("no row is preselected")]
    NothingPreselected,
}
