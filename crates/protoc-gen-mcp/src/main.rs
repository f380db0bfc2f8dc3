//! `protoc-gen-mcp`: generates Python MCP servers from protobuf packages.
//!
//! With no arguments the binary speaks the `protoc` plugin protocol: a
//! `CodeGeneratorRequest` on stdin, a `CodeGeneratorResponse` on stdout.
//!
//! # Examples
//!
//! ```bash
//! # As a protoc plugin
//! protoc --plugin=protoc-gen-mcp --mcp_out=gen/python --mcp_opt=log_level=debug \
//!     example/v1/example.proto
//!
//! # Without protoc, from a JSON schema
//! protoc-gen-mcp --schema schema.json --out gen/python
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use prost::Message;
use protoc_gen_mcp::{logging, plugin, standalone, RawCodeGeneratorRequest};
use protomcp_core::{Error, GeneratorConfig};
use protomcp_core::cli::{ExitCode, LogFormat};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Protobuf to MCP server generator.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-mcp")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Log format on stderr (text, json)
    #[arg(long = "log-format", default_value = "text")]
    log_format: String,

    /// JSON schema file to render instead of reading a protoc request
    #[arg(long, requires = "out")]
    schema: Option<PathBuf>,

    /// Output directory for --schema
    #[arg(long, requires = "schema")]
    out: Option<PathBuf>,

    /// Replacement server template
    #[arg(long)]
    template: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = cli
        .log_format
        .parse::<LogFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = match (&cli.schema, &cli.out) {
        (Some(schema), Some(out)) => {
            logging::init(log_format, logging::env_filter(cli.verbose, None)?)?;
            run_standalone(schema, out, cli.template.as_deref())
        }
        _ => {
            run_plugin(&cli, log_format)?;
            ExitCode::SUCCESS
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run_standalone(schema: &Path, out: &Path, template: Option<&Path>) -> ExitCode {
    match standalone::generate_to_dir(schema, out, template) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "generation failed");
            eprintln!("protoc-gen-mcp: {e:#}");
            let bad_schema = e
                .downcast_ref::<protomcp_core::Error>()
                .is_some_and(protomcp_core::Error::is_descriptor_error);
            if bad_schema {
                ExitCode::INVALID_INPUT
            } else {
                ExitCode::ERROR
            }
        }
    }
}

/// Plugin mode. Generation failures travel in the response, so the
/// process only fails when the request cannot be read or the response
/// cannot be written.
fn run_plugin(cli: &Cli, log_format: LogFormat) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read CodeGeneratorRequest from stdin")?;
    let request = RawCodeGeneratorRequest::from_bytes(&input)?;

    let config = GeneratorConfig::from_parameter(request.parameter.as_deref());
    let filter = logging::env_filter(
        cli.verbose,
        config.as_ref().ok().and_then(|c| c.log_level.as_deref()),
    );
    // A bad log_level is a parameter error: log with the default filter and
    // report it in the response.
    let (filter, config) = match filter {
        Ok(filter) => (filter, config),
        Err(e) => (
            logging::env_filter(cli.verbose, None)?,
            Err(Error::ConfigError {
                message: format!("{e:#}"),
            }),
        ),
    };
    logging::init(log_format, filter)?;

    let response = match config {
        Ok(mut config) => {
            if cli.template.is_some() {
                config.template.clone_from(&cli.template);
            }
            plugin::respond(&request, &config)
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid plugin parameters");
            plugin::response(Err(e))
        }
    };

    io::stdout()
        .write_all(&response.encode_to_vec())
        .context("failed to write CodeGeneratorResponse to stdout")
}
