//! `protoc` plugin mode: request in, response out.
//!
//! Every failure after the request has been decoded is reported through
//! `CodeGeneratorResponse.error` with no files attached, which is how
//! `protoc` expects a plugin to reject its input.

use crate::request::RawCodeGeneratorRequest;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;
use protomcp_codegen::{GeneratedCode, Generator, TemplateEngine};
use protomcp_core::{GeneratorConfig, Result};
use tracing::{error, info};

/// Features advertised to `protoc`.
pub const SUPPORTED_FEATURES: u64 = Feature::Proto3Optional as u64;

/// Generates a response for a decoded request.
#[must_use]
pub fn respond(request: &RawCodeGeneratorRequest, config: &GeneratorConfig) -> CodeGeneratorResponse {
    match generate(request, config) {
        Ok(code) => {
            info!(files = code.file_count(), "plugin run succeeded");
            response(Ok(code))
        }
        Err(e) => {
            error!(error = %e, "plugin run failed");
            response(Err(e))
        }
    }
}

/// Runs the generator over the request's target files.
///
/// A configured template override is parsed once here; otherwise the
/// shared embedded template is used.
///
/// # Errors
///
/// Returns the first descriptor, template or render error.
pub fn generate(request: &RawCodeGeneratorRequest, config: &GeneratorConfig) -> Result<GeneratedCode> {
    let pool = request.descriptor_pool()?;
    let units = request.units(&pool)?;

    if let Some(path) = &config.template {
        let engine = TemplateEngine::from_file(path)?;
        Generator::with_engine(&engine).generate_all(&units)
    } else {
        Generator::new()?.generate_all(&units)
    }
}

/// Converts a generation outcome into the wire response.
#[must_use]
pub fn response(outcome: Result<GeneratedCode>) -> CodeGeneratorResponse {
    match outcome {
        Ok(code) => CodeGeneratorResponse {
            file: code
                .files
                .into_iter()
                .map(|f| File {
                    name: Some(f.path),
                    content: Some(f.content),
                    ..Default::default()
                })
                .collect(),
            supported_features: Some(SUPPORTED_FEATURES),
            ..Default::default()
        },
        Err(e) => CodeGeneratorResponse {
            error: Some(e.to_string()),
            supported_features: Some(SUPPORTED_FEATURES),
            ..Default::default()
        },
    }
}
