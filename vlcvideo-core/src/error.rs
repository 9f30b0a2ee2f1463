// ============================================================================
// vlcvideo-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Binding Layer
//
// Engine-facing operations in this crate are fail-soft: a missing track name
// is an empty string and a rejected adjustment is silently ignored by the
// engine. The errors below cover the host protocol around them (unknown or
// read-only properties, value coercion, construction preconditions) and the
// loading of simulated media profiles.
//
// KEY COMPONENTS:
// - CoreError: Enum of every error the core library reports
// - CoreResult: Result alias used throughout the crate and by the CLI

// ---- External crate imports ----
use thiserror::Error;

/// Errors reported by the vlcvideo core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{class} has no property named '{name}'")]
    UnknownProperty { class: &'static str, name: String },

    #[error("Property '{name}' of {class} is read-only")]
    ReadOnlyProperty { class: &'static str, name: String },

    #[error("{class} has no method named '{name}'")]
    UnknownMethod { class: &'static str, name: String },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid media profile: {0}")]
    Profile(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Another error, with a description of what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Wraps `self` with a description of the failed step.
    pub fn context(self, context: impl Into<String>) -> Self {
        CoreError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error below any `Context` wrappers.
    pub fn root(&self) -> &CoreError {
        match self {
            CoreError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for vlcvideo operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `TypeMismatch` error for a conversion from `found` to `expected`.
pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> CoreError {
    CoreError::TypeMismatch { expected, found }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_root_kind() {
        let err = CoreError::Profile("duplicate track id 3".to_string())
            .context("Failed to load profile 'a.json'")
            .context("Starting host");
        assert_eq!(
            err.to_string(),
            "Starting host: Failed to load profile 'a.json': Invalid media profile: duplicate track id 3"
        );
        assert!(matches!(err.root(), CoreError::Profile(_)));
    }
}
