use crate::ResponseError;

/// Error type for running a form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// User cancelled the form (Ctrl+C, closed window, etc.)
    #[error("Form cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal gone, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// The backend returned responses that do not fit the form.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl FormError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
