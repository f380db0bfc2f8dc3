//! Template engine for code generation using Handlebars.
//!
//! The server template is parsed once per process and shared read-only by
//! every generation after that ([`TemplateEngine::shared`]). Callers that
//! configure a replacement template build their own engine once with
//! [`TemplateEngine::from_file`] and reuse it for the whole run.
//!
//! Handlebars' compiled template is the render-node tree (literal text,
//! `#each` iteration, field substitution) interpreted against the
//! serialized [`PackageUnit`].
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::TemplateEngine;
//!
//! let engine = TemplateEngine::shared().unwrap();
//! let again = TemplateEngine::shared().unwrap();
//! assert!(std::ptr::eq(engine, again));
//! ```

use crate::ir::PackageUnit;
use handlebars::Handlebars;
use protomcp_core::{Error, Result};
use std::path::Path;
use std::sync::OnceLock;

/// Registered name of the server template.
pub const SERVER_TEMPLATE: &str = "mcp/server";

/// The embedded server template asset.
pub const EMBEDDED_SERVER_TEMPLATE: &str = include_str!("../templates/mcp_server.py.hbs");

static SHARED: OnceLock<std::result::Result<TemplateEngine, String>> = OnceLock::new();

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; the shared instance is immutable after
/// initialization, so no locking is needed to render from it.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Returns the process-wide engine built from the embedded template.
    ///
    /// The first call parses the template; later calls return the same
    /// instance (or the same initialization failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateInit`] if the embedded template does not
    /// parse.
    pub fn shared() -> Result<&'static Self> {
        SHARED
            .get_or_init(|| {
                tracing::debug!("parsing embedded server template");
                Self::from_source(EMBEDDED_SERVER_TEMPLATE).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|message| Error::TemplateInit {
                message: message.clone(),
            })
    }

    /// Creates an engine from template source text.
    ///
    /// Strict mode is on, so rendering fails when the template references
    /// a field the IR does not have. Output is not HTML-escaped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateInit`] on a template syntax error.
    ///
    /// # Examples
    ///
    /// ```
    /// use protomcp_codegen::TemplateEngine;
    ///
    /// assert!(TemplateEngine::from_source("# {{package}}").is_ok());
    /// assert!(TemplateEngine::from_source("# {{package").is_err());
    /// ```
    pub fn from_source(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(SERVER_TEMPLATE, source)
            .map_err(|e| Error::TemplateInit {
                message: format!("failed to parse server template: {e}"),
            })?;

        Ok(Self { handlebars })
    }

    /// Creates an engine from a template file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateInit`] if the file cannot be read or does
    /// not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::TemplateInit {
            message: format!("failed to read template {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded template override");
        Self::from_source(&source)
    }

    /// Renders the server module for one package.
    ///
    /// Either the whole module is returned or an error; partial output is
    /// never exposed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if template execution fails.
    pub fn render(&self, unit: &PackageUnit) -> Result<String> {
        self.handlebars
            .render(SERVER_TEMPLATE, unit)
            .map_err(|e| Error::Render {
                package: unit.package.to_string(),
                message: e.to_string(),
            })
    }
}
