//! Output path derivation.
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::path::derive_path;
//! use protomcp_core::PackageName;
//!
//! let package = PackageName::new("acme.billing.v1").unwrap();
//! assert_eq!(derive_path(&package), "acme/billing/v1/acme_mcp.py");
//! ```

use protomcp_core::PackageName;

/// Suffix appended after the base name.
pub const OUTPUT_SUFFIX: &str = "mcp.py";

/// Computes the generated file's path from its package.
///
/// Every `.` becomes `/`, then `{base}_{OUTPUT_SUFFIX}` is appended, where
/// the base name is the package's first segment. Paths always use `/`, as
/// `protoc` expects, independent of the host platform.
#[must_use]
pub fn derive_path(package: &PackageName) -> String {
    let directory = package.as_str().replace('.', "/");
    format!("{directory}/{}_{OUTPUT_SUFFIX}", package.first_segment())
}
