// ============================================================================
// vlcvideo-cli/src/error.rs
// ============================================================================
//
// CLI ERRORS: Context for Profile and Script Loading
//
// The CLI reports `CoreError` unchanged. Failures that come from the file
// system (profile and script files, stdin) get a `CoreError::Context`
// wrapper naming the file, so the message says which input failed while
// `CoreError::root` still exposes the underlying IO or profile error.

// ---- External crate imports ----
use vlcvideo_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt::Display;

/// Result alias for CLI operations.
pub type CliResult<T> = CoreResult<T>;

/// Attaches the failing input's description to an error.
pub trait CliErrorContext<T> {
    fn cli_context(self, context: impl Display) -> CliResult<T>;

    /// Like `cli_context`, building the description only on failure.
    fn cli_with_context<C: Display>(self, f: impl FnOnce() -> C) -> CliResult<T>;
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context(self, context: impl Display) -> CliResult<T> {
        self.map_err(|e| e.into().context(context.to_string()))
    }

    fn cli_with_context<C: Display>(self, f: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|e| e.into().context(f().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_keeps_kind_under_context() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .cli_with_context(|| "Failed to read script 'a.vlcs'")
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to read script 'a.vlcs': IO error: gone");
        assert!(matches!(
            err.root(),
            CoreError::Io(e) if e.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_profile_error_context() {
        let result: CliResult<()> = Err(CoreError::Profile("bad".to_string()));
        let err = result.cli_context("Failed to load profile 'p.json'").unwrap_err();
        assert!(matches!(err, CoreError::Context { .. }));
        assert!(matches!(err.root(), CoreError::Profile(msg) if msg == "bad"));
    }
}
