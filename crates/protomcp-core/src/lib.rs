//! Core types, configuration, and errors for protoc-gen-mcp.
//!
//! This crate provides the foundational types shared by the code generator
//! and the `protoc` plugin binary.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`PackageName`)
//! - Error hierarchy with contextual information
//! - Generator configuration (plugin parameters and TOML files)
//! - CLI types (`ExitCode`, `LogFormat`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use types::{PackageName, is_identifier};
