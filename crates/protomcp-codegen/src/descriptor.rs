//! Descriptor capability consumed by the walker.
//!
//! The walker never touches a concrete schema representation. Anything that
//! can answer these few questions (name, kind, optionality, direct fields,
//! and the message-level resource slot) can be rendered. Two adapters ship
//! with the crate: [`crate::proto`] over `prost-reflect` descriptors and
//! [`crate::schema`] over an owned, serde-deserializable model.

use protomcp_core::Result;
use serde::{Deserialize, Serialize};

/// Kind of a schema field, mirroring the protobuf wire kinds.
///
/// `Map` and `Unknown` exist for representations that can express them;
/// both fall through to the string default in [`crate::type_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// 64-bit float
    Double,
    /// 32-bit float
    Float,
    /// Signed varint, 32 bits
    Int32,
    /// Signed varint, 64 bits
    Int64,
    /// Unsigned varint, 32 bits
    Uint32,
    /// Unsigned varint, 64 bits
    Uint64,
    /// Zigzag varint, 32 bits
    Sint32,
    /// Zigzag varint, 64 bits
    Sint64,
    /// Fixed-width unsigned, 32 bits
    Fixed32,
    /// Fixed-width unsigned, 64 bits
    Fixed64,
    /// Fixed-width signed, 32 bits
    Sfixed32,
    /// Fixed-width signed, 64 bits
    Sfixed64,
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
    /// Raw bytes
    Bytes,
    /// Enumeration
    Enum,
    /// Nested message
    Message,
    /// Proto2 group
    Group,
    /// Map field
    Map,
    /// Anything a representation cannot classify
    #[serde(other)]
    Unknown,
}

/// Decoded `google.api.resource` annotation.
///
/// Only its presence matters for classification. The patterns end up in the
/// generated resource schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAnnotation {
    /// Resource type name, e.g. `example.googleapis.com/User`
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Resource name patterns
    #[serde(rename = "pattern", default)]
    pub patterns: Vec<String>,
}

/// Narrow read-only view of a message or field.
///
/// A single trait covers both: a message reports [`FieldKind::Message`] and
/// its fields; a field reports its own kind and an empty field list unless
/// the representation chooses otherwise. The walker only ever descends one
/// level.
pub trait Descriptor: Sized {
    /// Declared name (unqualified).
    fn name(&self) -> &str;

    /// Field kind; messages report [`FieldKind::Message`].
    fn kind(&self) -> FieldKind;

    /// `true` when the field carries an explicit optional marker.
    fn is_optional(&self) -> bool;

    /// Direct fields in declaration order.
    fn fields(&self) -> Vec<Self>;

    /// Message-level resource annotation slot.
    ///
    /// Returns `None` when the slot is absent or does not decode.
    fn resource_annotation(&self) -> Option<ResourceAnnotation>;
}

/// A service as seen by the walker.
#[derive(Debug, Clone)]
pub struct ServiceSchema<D> {
    /// Service name
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<MethodSchema<D>>,
}

/// A method as seen by the walker.
#[derive(Debug, Clone)]
pub struct MethodSchema<D> {
    /// Method name
    pub name: String,
    /// Resolved input message
    pub input: D,
}

/// One compilation unit to generate code for.
pub trait SchemaUnit {
    /// Descriptor type for messages and fields of this unit.
    type Descriptor: Descriptor;

    /// Dotted package identifier.
    fn package(&self) -> &str;

    /// Services in declaration order with their input messages resolved.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if a method's input type cannot be
    /// resolved.
    fn services(&self) -> Result<Vec<ServiceSchema<Self::Descriptor>>>;

    /// Top-level messages in declaration order.
    fn messages(&self) -> Vec<Self::Descriptor>;
}
