//! `protoc` plugin request decoding.
//!
//! `prost_types::compiler::CodeGeneratorRequest` decodes `proto_file` into
//! typed `FileDescriptorProto`s, which drops option extensions such as
//! `google.api.resource`. The request is therefore read with `proto_file`
//! kept as raw bytes and those bytes are handed straight to
//! [`DescriptorPool::decode`].

use prost::Message;
use prost_reflect::DescriptorPool;
use protomcp_codegen::proto::ProtoFile;
use protomcp_core::{Error, Result};

/// `CodeGeneratorRequest` with undecoded file descriptors.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawCodeGeneratorRequest {
    /// Files named on the `protoc` command line.
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    /// The `--mcp_opt` parameter string.
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// Every file in the transitive closure, dependencies first.
    #[prost(bytes = "vec", repeated, tag = "15")]
    pub proto_file: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
struct RawFileDescriptorSet {
    #[prost(bytes = "vec", repeated, tag = "1")]
    file: Vec<Vec<u8>>,
}

impl RawCodeGeneratorRequest {
    /// Decodes a request read from stdin.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if the bytes are not a request.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes).map_err(|e| Error::Descriptor {
            message: "failed to decode CodeGeneratorRequest".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// Builds a descriptor pool from every file in the request.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if the files do not link.
    pub fn descriptor_pool(&self) -> Result<DescriptorPool> {
        let set = RawFileDescriptorSet {
            file: self.proto_file.clone(),
        };
        DescriptorPool::decode(set.encode_to_vec().as_slice()).map_err(|e| Error::Descriptor {
            message: "failed to build descriptor pool".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// The files to generate, in request order.
    ///
    /// Dependencies that were not named on the command line are skipped.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if a named file is missing from `pool`.
    pub fn units(&self, pool: &DescriptorPool) -> Result<Vec<ProtoFile>> {
        self.file_to_generate
            .iter()
            .map(|name| ProtoFile::from_pool(pool, name))
            .collect()
    }
}
