use thiserror::Error;

/// Errors when trying to resolve a certain type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No value is registered for the required type
    #[error("No value registered for '{0}'")]
    Missing(&'static str),

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}
