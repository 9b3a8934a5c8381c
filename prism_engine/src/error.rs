//! Error types for the Prism engine
//!
//! Configuration problems (unreadable or malformed effect files, unresolved
//! mandatory targets) abandon the affected unit of work. Missing resources at
//! draw time never surface as errors; they switch the matching shader feature
//! off instead.

use std::fmt;

/// Result type for Prism engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Asset description unusable or a mandatory target unresolved
    ConfigurationError(String),

    /// Effect description malformed at the given (1-based) line
    ParseError {
        line: usize,
        message: String,
    },

    /// Named resource (shader, geometry, texture) not available
    MissingResource(String),

    /// Backend-specific error reported by a device collaborator
    BackendError(String),

    /// Initialization failed (no graphics context, invalid config)
    InitializationFailed(String),

    /// File could not be opened or read
    Io(String),
}

impl Error {
    /// True for every error class that aborts a load or a pass
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::ConfigurationError(_) | Error::ParseError { .. } | Error::Io(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Error::ParseError { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            Error::MissingResource(msg) => write!(f, "Missing resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// ===== ERROR MACROS =====

/// Log an ERROR and return `Err(Error::BackendError(..))` from the enclosing function
///
/// # Example
///
/// ```ignore
/// engine_bail!("prism::MockDevice", "target {}x{} too large", w, h);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        return Err($crate::prism::Error::BackendError(message));
    }};
}

/// Log an ERROR and evaluate to the given single-message `Error` variant
///
/// # Example
///
/// ```ignore
/// let target = tm.resolve(name)
///     .ok_or_else(|| engine_err!("prism::GraphicsManager", ConfigurationError,
///         "Invalid destination buffer '{}'", name))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::prism::Error::$variant(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
