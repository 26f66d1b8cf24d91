//! Error taxonomy for registry lookups, page rendering and static export.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the step registry: construction-time validation and
/// lookups with input outside the known set of steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("step index {index} out of range (registry has {len} steps)")]
    OutOfRange { index: usize, len: usize },

    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("no step page for {0}")]
    UnknownStep(String),

    #[error("registry must contain at least one step")]
    Empty,

    #[error("duplicate route: {0}")]
    DuplicateRoute(String),

    #[error("duplicate title: {0}")]
    DuplicateTitle(String),

    #[error("invalid route {route:?}: {reason}")]
    InvalidRoute { route: String, reason: &'static str },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl RenderError {
    /// True when the requested page does not exist (as opposed to a broken render).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RenderError::Registry(RegistryError::UnknownStep(_) | RegistryError::UnknownRoute(_))
        )
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}
