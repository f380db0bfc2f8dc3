//! Standalone mode: render JSON schema files to disk without `protoc`.

use anyhow::{Context, Result};
use protomcp_codegen::schema::SchemaFile;
use protomcp_codegen::{GeneratedCode, Generator, TemplateEngine};
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders every unit in `schema` and writes the modules under `out`.
///
/// Nothing is written unless every unit renders.
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded, any unit fails, or a
/// file cannot be written.
pub fn generate_to_dir(schema: &Path, out: &Path, template: Option<&Path>) -> Result<GeneratedCode> {
    let units = SchemaFile::list_from_json_file(schema)
        .with_context(|| format!("failed to load schema {}", schema.display()))?;

    let code = match template {
        Some(path) => {
            let engine = TemplateEngine::from_file(path)?;
            Generator::with_engine(&engine).generate_all(&units)?
        }
        None => Generator::new()?.generate_all(&units)?,
    };

    for file in code.files() {
        let target = out.join(file.path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&target, file.content())
            .with_context(|| format!("failed to write {}", target.display()))?;
        info!(path = %target.display(), "wrote server module");
    }

    Ok(code)
}
