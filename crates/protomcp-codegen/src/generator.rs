//! Generation driver.
//!
//! Runs walk → build → render → path for each unit, strictly in the order
//! given. The first failing unit aborts the run and nothing is returned for
//! any unit.
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::Generator;
//! use protomcp_codegen::schema::SchemaFile;
//!
//! let unit = SchemaFile::from_json_str(r#"{"package": "example.v1"}"#).unwrap();
//!
//! let generator = Generator::new().unwrap();
//! let code = generator.generate_all([&unit]).unwrap();
//! assert_eq!(code.files[0].path, "example/v1/example_mcp.py");
//! ```

use crate::descriptor::SchemaUnit;
use crate::ir::{self, PackageUnit};
use crate::path::derive_path;
use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedCode, GeneratedFile};
use crate::walker::walk;
use protomcp_core::Result;
use tracing::{debug, info};

/// MCP server generator.
///
/// Borrows a parsed [`TemplateEngine`]; [`Generator::new`] uses the shared
/// embedded template.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'e> {
    engine: &'e TemplateEngine,
}

impl Generator<'static> {
    /// Creates a generator over the shared embedded template.
    ///
    /// # Errors
    ///
    /// Returns a template initialization error if the embedded template
    /// does not parse.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::shared()?,
        })
    }
}

impl<'e> Generator<'e> {
    /// Creates a generator over a caller-provided engine.
    #[must_use]
    pub const fn with_engine(engine: &'e TemplateEngine) -> Self {
        Self { engine }
    }

    /// Walks a unit and assembles its IR without rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit has an empty package or an unresolvable
    /// method input.
    pub fn package_unit<S: SchemaUnit>(&self, unit: &S) -> Result<PackageUnit> {
        walk(unit).map(ir::build)
    }

    /// Generates the server module for one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if walking or rendering fails.
    pub fn generate<S: SchemaUnit>(&self, unit: &S) -> Result<GeneratedFile> {
        let package = self.package_unit(unit)?;
        info!(
            package = %package.package,
            services = package.services.len(),
            tools = package.tool_count(),
            resources = package.messages.len(),
            "generating MCP server"
        );

        let content = self.engine.render(&package)?;
        let path = derive_path(&package.package);
        debug!(%path, bytes = content.len(), "rendered server module");

        Ok(GeneratedFile { path, content })
    }

    /// Generates every unit in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first unit's error; files generated before it are
    /// discarded.
    pub fn generate_all<'u, S, I>(&self, units: I) -> Result<GeneratedCode>
    where
        S: SchemaUnit + 'u,
        I: IntoIterator<Item = &'u S>,
    {
        let mut code = GeneratedCode::new();
        for unit in units {
            code.add_file(self.generate(unit)?);
        }
        info!(files = code.file_count(), "generation complete");
        Ok(code)
    }
}
