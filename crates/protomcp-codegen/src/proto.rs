//! Descriptor adapter over `prost-reflect`.
//!
//! Wraps the descriptors `protoc` hands to the plugin. Options are read
//! dynamically through the pool, so the `google.api.resource` extension is
//! visible whenever `google/api/resource.proto` was part of the request.

use crate::descriptor::{
    Descriptor, FieldKind, MethodSchema, ResourceAnnotation, SchemaUnit, ServiceSchema,
};
use crate::resource::{RESOURCE_DESCRIPTOR, RESOURCE_EXTENSION};
use prost::Message;
use prost_reflect::{
    DescriptorPool, FieldDescriptor, FileDescriptor, Kind, MessageDescriptor, ReflectMessage, Value,
};
use prost_types::field_descriptor_proto::Label;
use protomcp_core::{Error, Result};

/// Wire shape of `google.api.ResourceDescriptor` (fields the generator reads).
#[derive(Clone, PartialEq, ::prost::Message)]
struct ResourceDescriptorProto {
    #[prost(string, tag = "1")]
    r#type: String,
    #[prost(string, repeated, tag = "2")]
    pattern: Vec<String>,
}

/// One `.proto` file from a descriptor pool.
#[derive(Debug, Clone)]
pub struct ProtoFile {
    file: FileDescriptor,
}

impl ProtoFile {
    /// Wraps a file descriptor.
    #[must_use]
    pub const fn new(file: FileDescriptor) -> Self {
        Self { file }
    }

    /// Looks up `name` (e.g. `example/v1/example.proto`) in `pool`.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if the pool has no such file.
    pub fn from_pool(pool: &DescriptorPool, name: &str) -> Result<Self> {
        pool.get_file_by_name(name)
            .map(Self::new)
            .ok_or_else(|| Error::Descriptor {
                message: format!("file '{name}' is not in the descriptor pool"),
                source: None,
            })
    }

    /// File name as given to `protoc`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.file.name()
    }
}

impl SchemaUnit for ProtoFile {
    type Descriptor = ProtoDescriptor;

    fn package(&self) -> &str {
        self.file.package_name()
    }

    fn services(&self) -> Result<Vec<ServiceSchema<ProtoDescriptor>>> {
        Ok(self
            .file
            .services()
            .map(|service| ServiceSchema {
                name: service.name().to_string(),
                methods: service
                    .methods()
                    .map(|method| MethodSchema {
                        name: method.name().to_string(),
                        input: ProtoDescriptor::Message(method.input()),
                    })
                    .collect(),
            })
            .collect())
    }

    fn messages(&self) -> Vec<ProtoDescriptor> {
        self.file.messages().map(ProtoDescriptor::Message).collect()
    }
}

/// A message or field from a descriptor pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtoDescriptor {
    /// Message descriptor
    Message(MessageDescriptor),
    /// Field descriptor
    Field(FieldDescriptor),
}

impl Descriptor for ProtoDescriptor {
    fn name(&self) -> &str {
        match self {
            Self::Message(m) => m.name(),
            Self::Field(f) => f.name(),
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Message(_) => FieldKind::Message,
            Self::Field(f) if f.is_map() => FieldKind::Map,
            Self::Field(f) => field_kind(&f.kind()),
        }
    }

    fn is_optional(&self) -> bool {
        match self {
            Self::Message(_) => false,
            Self::Field(f) => has_optional_keyword(f),
        }
    }

    fn fields(&self) -> Vec<Self> {
        match self {
            Self::Message(m) => m.fields().map(Self::Field).collect(),
            Self::Field(_) => Vec::new(),
        }
    }

    fn resource_annotation(&self) -> Option<ResourceAnnotation> {
        match self {
            Self::Message(m) => decode_resource(m),
            Self::Field(_) => None,
        }
    }
}

const fn field_kind(kind: &Kind) -> FieldKind {
    match kind {
        Kind::Double => FieldKind::Double,
        Kind::Float => FieldKind::Float,
        Kind::Int32 => FieldKind::Int32,
        Kind::Int64 => FieldKind::Int64,
        Kind::Uint32 => FieldKind::Uint32,
        Kind::Uint64 => FieldKind::Uint64,
        Kind::Sint32 => FieldKind::Sint32,
        Kind::Sint64 => FieldKind::Sint64,
        Kind::Fixed32 => FieldKind::Fixed32,
        Kind::Fixed64 => FieldKind::Fixed64,
        Kind::Sfixed32 => FieldKind::Sfixed32,
        Kind::Sfixed64 => FieldKind::Sfixed64,
        Kind::Bool => FieldKind::Bool,
        Kind::String => FieldKind::String,
        Kind::Bytes => FieldKind::Bytes,
        Kind::Message(_) => FieldKind::Message,
        Kind::Enum(_) => FieldKind::Enum,
    }
}

/// Whether the field was declared with the `optional` keyword.
///
/// proto3: the `proto3_optional` flag. proto2: the optional label outside a
/// oneof. Editions files never report the keyword.
fn has_optional_keyword(field: &FieldDescriptor) -> bool {
    let proto = field.field_descriptor_proto();
    if proto.proto3_optional() {
        return true;
    }

    let file = field.parent_message().parent_file();
    let proto2 = matches!(file.file_descriptor_proto().syntax(), "" | "proto2");
    proto2 && proto.label() == Label::Optional && proto.oneof_index.is_none()
}

fn decode_resource(message: &MessageDescriptor) -> Option<ResourceAnnotation> {
    let extension = message
        .parent_pool()
        .get_extension_by_name(RESOURCE_EXTENSION)?;

    let options = message.options();
    if !options.has_extension(&extension) {
        return None;
    }

    let value = options.get_extension(&extension);
    let Value::Message(resource) = value.as_ref() else {
        return None;
    };
    if resource.descriptor().full_name() != RESOURCE_DESCRIPTOR {
        return None;
    }

    match ResourceDescriptorProto::decode(resource.encode_to_vec().as_slice()) {
        Ok(decoded) => Some(ResourceAnnotation {
            resource_type: decoded.r#type,
            patterns: decoded.pattern,
        }),
        Err(e) => {
            tracing::debug!(name = message.full_name(), error = %e, "undecodable resource option");
            None
        }
    }
}
