//! Field kind to JSON Schema type mapping.
//!
//! This is the generator's only type-narrowing policy. Width and signedness
//! are dropped: every integer encoding and both float widths become
//! `number`. Kinds without a listed mapping fall back to `string`, which is
//! a documented default rather than an error.
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::{FieldKind, JsonType, map_type};
//!
//! assert_eq!(map_type(FieldKind::Sint64), JsonType::Number);
//! assert_eq!(map_type(FieldKind::Bool), JsonType::Boolean);
//! assert_eq!(map_type(FieldKind::Message), JsonType::String);
//! ```

use crate::descriptor::FieldKind;
use serde::Serialize;
use std::fmt;

/// Output type vocabulary for tool input schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// JSON string
    String,
    /// JSON boolean
    Boolean,
    /// JSON number
    Number,
}

impl JsonType {
    /// Returns the JSON Schema type keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a field kind to its JSON Schema type. Total; never fails.
#[must_use]
pub const fn map_type(kind: FieldKind) -> JsonType {
    match kind {
        FieldKind::Bool => JsonType::Boolean,
        FieldKind::Double
        | FieldKind::Float
        | FieldKind::Int32
        | FieldKind::Int64
        | FieldKind::Uint32
        | FieldKind::Uint64
        | FieldKind::Sint32
        | FieldKind::Sint64
        | FieldKind::Fixed32
        | FieldKind::Fixed64
        | FieldKind::Sfixed32
        | FieldKind::Sfixed64 => JsonType::Number,
        // String, plus the default for bytes, enums, messages, groups, maps
        // and anything unclassified.
        FieldKind::String
        | FieldKind::Bytes
        | FieldKind::Enum
        | FieldKind::Message
        | FieldKind::Group
        | FieldKind::Map
        | FieldKind::Unknown => JsonType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [FieldKind; 20] = [
        FieldKind::Double,
        FieldKind::Float,
        FieldKind::Int32,
        FieldKind::Int64,
        FieldKind::Uint32,
        FieldKind::Uint64,
        FieldKind::Sint32,
        FieldKind::Sint64,
        FieldKind::Fixed32,
        FieldKind::Fixed64,
        FieldKind::Sfixed32,
        FieldKind::Sfixed64,
        FieldKind::Bool,
        FieldKind::String,
        FieldKind::Bytes,
        FieldKind::Enum,
        FieldKind::Message,
        FieldKind::Group,
        FieldKind::Map,
        FieldKind::Unknown,
    ];

    #[test]
    fn test_numeric_kinds_collapse_to_number() {
        let numeric = &ALL_KINDS[..12];
        for kind in numeric {
            assert_eq!(map_type(*kind), JsonType::Number, "{kind:?}");
        }
    }

    #[test]
    fn test_bool_and_string() {
        assert_eq!(map_type(FieldKind::Bool), JsonType::Boolean);
        assert_eq!(map_type(FieldKind::String), JsonType::String);
    }

    #[test]
    fn test_unlisted_kinds_default_to_string() {
        for kind in [
            FieldKind::Bytes,
            FieldKind::Enum,
            FieldKind::Message,
            FieldKind::Group,
            FieldKind::Map,
            FieldKind::Unknown,
        ] {
            assert_eq!(map_type(kind), JsonType::String, "{kind:?}");
        }
    }

    #[test]
    fn test_totality() {
        for kind in ALL_KINDS {
            assert!(matches!(
                map_type(kind).as_str(),
                "string" | "boolean" | "number"
            ));
        }
    }

    #[test]
    fn test_serializes_as_keyword() {
        assert_eq!(serde_json::to_string(&JsonType::Number).unwrap(), "\"number\"");
        assert_eq!(JsonType::Boolean.to_string(), "boolean");
    }
}
