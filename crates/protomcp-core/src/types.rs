//! Strong domain types for protoc-gen-mcp.
//!
//! # Examples
//!
//! ```
//! use protomcp_core::PackageName;
//!
//! let package = PackageName::new("acme.billing.v1").unwrap();
//! assert_eq!(package.first_segment(), "acme");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dotted protobuf package identifier (newtype over String).
///
/// Every dot-separated segment is a protobuf identifier
/// (`[A-Za-z_][A-Za-z0-9_]*`), so the name always maps to a relative path
/// of plain directory names.
///
/// # Examples
///
/// ```
/// use protomcp_core::PackageName;
///
/// let package = PackageName::new("example.v1").unwrap();
/// assert_eq!(package.as_str(), "example.v1");
/// assert!(PackageName::new("").is_err());
/// assert!(PackageName::new(".tmp.x").is_err());
/// assert!(PackageName::new("acme..v1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Creates a package name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackage`] if `name` is empty or any segment
    /// is not an identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let package = Self(name.into());
        if package.0.is_empty() {
            return Err(Error::InvalidPackage {
                reason: "package identifier cannot be empty".to_string(),
            });
        }
        if let Some(segment) = package.segments().find(|s| !is_identifier(s)) {
            return Err(Error::InvalidPackage {
                reason: format!("'{}' has invalid segment '{segment}'", package.0),
            });
        }
        Ok(package)
    }

    /// Returns the package name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated segments in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use protomcp_core::PackageName;
    ///
    /// let package = PackageName::new("acme.billing.v1").unwrap();
    /// let segments: Vec<_> = package.segments().collect();
    /// assert_eq!(segments, ["acme", "billing", "v1"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the first dot-separated segment.
    #[must_use]
    pub fn first_segment(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

}

/// Returns `true` if `name` is a protobuf identifier: an ASCII letter or
/// underscore followed by ASCII letters, digits or underscores.
///
/// # Examples
///
/// ```
/// use protomcp_core::is_identifier;
///
/// assert!(is_identifier("customer_id"));
/// assert!(!is_identifier("it's"));
/// assert!(!is_identifier("1st"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PackageName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PackageName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}
