//! Error types for protoc-gen-mcp.
//!
//! Generation is pure and deterministic, so no error here is retryable:
//! every variant aborts the generation run it occurs in.
//!
//! # Examples
//!
//! ```
//! use protomcp_core::{Error, Result};
//!
//! fn check_parameter(key: &str) -> Result<()> {
//!     if key.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "parameter key cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_parameter("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for protoc-gen-mcp.
///
/// All errors in the workspace use this type. Unknown field kinds and
/// missing resource annotations are deliberately absent: those resolve to
/// documented defaults instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// The template asset could not be loaded or parsed.
    ///
    /// Fatal for the whole run; raised before any schema unit is processed.
    #[error("Template initialization failed: {message}")]
    TemplateInit {
        /// Description of the load or parse failure
        message: String,
    },

    /// Executing the template against a package IR failed.
    ///
    /// No output is produced for the failing unit, and the run stops.
    #[error("Rendering failed for package '{package}': {message}")]
    Render {
        /// Package identifier of the unit being rendered
        package: String,
        /// Description of the rendering failure
        message: String,
    },

    /// A package identifier violated its format requirements.
    #[error("Invalid package identifier: {reason}")]
    InvalidPackage {
        /// Why the identifier was rejected
        reason: String,
    },

    /// The incoming schema description could not be decoded.
    #[error("Descriptor error: {message}")]
    Descriptor {
        /// Description of the decoding problem
        message: String,
        /// Underlying error cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    ///
    /// Raised for malformed plugin parameters, unknown keys, or unreadable
    /// configuration files.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error while reading a template or configuration file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a template initialization error.
    ///
    /// # Examples
    ///
    /// ```
    /// use protomcp_core::Error;
    ///
    /// let err = Error::TemplateInit {
    ///     message: "unclosed expression".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateInit { .. })
    }

    /// Returns `true` if this is a rendering error.
    ///
    /// # Examples
    ///
    /// ```
    /// use protomcp_core::Error;
    ///
    /// let err = Error::Render {
    ///     package: "acme.v1".to_string(),
    ///     message: "missing field".to_string(),
    /// };
    /// assert!(err.is_render_error());
    /// ```
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::Render { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use protomcp_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "unknown key".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a descriptor decoding error.
    #[must_use]
    pub const fn is_descriptor_error(&self) -> bool {
        matches!(self, Self::Descriptor { .. })
    }
}

/// Result type alias for protoc-gen-mcp operations.
///
/// # Examples
///
/// ```
/// use protomcp_core::{Error, Result};
///
/// fn first_segment(package: &str) -> Result<&str> {
///     package.split('.').next().filter(|s| !s.is_empty()).ok_or_else(|| {
///         Error::InvalidArgument("empty package".to_string())
///     })
/// }
///
/// assert_eq!(first_segment("acme.v1").unwrap(), "acme");
/// assert!(first_segment("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_detection() {
        let err = Error::TemplateInit {
            message: "bad syntax".to_string(),
        };
        assert!(err.is_template_error());
        assert!(!err.is_render_error());
    }

    #[test]
    fn test_render_error_detection() {
        let err = Error::Render {
            package: "acme.v1".to_string(),
            message: "Variable \"package\" not found".to_string(),
        };
        assert!(err.is_render_error());
        assert!(!err.is_template_error());
    }

    #[test]
    fn test_descriptor_error_detection() {
        let err = Error::Descriptor {
            message: "truncated request".to_string(),
            source: None,
        };
        assert!(err.is_descriptor_error());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Render {
            package: "acme.billing.v1".to_string(),
            message: "boom".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("acme.billing.v1"));
        assert!(display.contains("boom"));
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/missing.hbs"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(format!("{err}").contains("/tmp/missing.hbs"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
