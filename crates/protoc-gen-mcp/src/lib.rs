//! `protoc-gen-mcp` library.
//!
//! The pieces of the plugin binary that can be tested without a process:
//! request decoding, the request → response driver, standalone rendering
//! and logging setup.

pub mod logging;
pub mod plugin;
pub mod request;
pub mod standalone;

pub use request::RawCodeGeneratorRequest;
