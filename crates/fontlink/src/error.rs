//! Extension error types.

/// Error raised when attaching the extension to a template host fails.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// No environment was supplied to [`attach`](crate::GoogleFonts::attach).
    #[error("Parameter 'env' must be a minijinja Environment")]
    MissingEnvironment,
}
