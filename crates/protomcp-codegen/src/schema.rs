//! Owned schema model.
//!
//! A serde-deserializable description of one compilation unit, used by the
//! plugin's standalone mode (`--schema file.json`) and by tests. It mirrors
//! the subset of protobuf the generator reads.
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::schema::SchemaFile;
//! use protomcp_codegen::SchemaUnit;
//!
//! let unit = SchemaFile::from_json_str(r#"{
//!     "package": "example.v1",
//!     "services": [{ "name": "UserService", "methods": [] }]
//! }"#).unwrap();
//!
//! assert_eq!(unit.package(), "example.v1");
//! assert_eq!(unit.services().unwrap().len(), 1);
//! ```

use crate::descriptor::{
    Descriptor, FieldKind, MethodSchema, ResourceAnnotation, SchemaUnit, ServiceSchema,
};
use protomcp_core::{Error, PackageName, Result, is_identifier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Dotted package identifier
    pub package: PackageName,
    /// Services in declaration order
    #[serde(default)]
    pub services: Vec<ServiceDef>,
    /// Top-level messages in declaration order
    #[serde(default)]
    pub messages: Vec<MessageDef>,
}

/// A service definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDef {
    /// Service name
    pub name: String,
    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// A method definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name
    pub name: String,
    /// Input message name, bare or package-qualified
    pub input_type: String,
}

/// A message definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message name
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// `google.api.resource` annotation, if any
    #[serde(default)]
    pub resource: Option<ResourceAnnotation>,
}

/// A field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Explicit optional marker
    #[serde(default)]
    pub optional: bool,
}

impl MessageDef {
    /// Wraps the message as a walker node.
    #[must_use]
    pub fn node(&self) -> SchemaNode {
        SchemaNode::Message(self.clone())
    }
}

/// Descriptor view over the owned model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// A message
    Message(MessageDef),
    /// A field
    Field(FieldDef),
}

impl Descriptor for SchemaNode {
    fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Field(f) => &f.name,
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Message(_) => FieldKind::Message,
            Self::Field(f) => f.kind,
        }
    }

    fn is_optional(&self) -> bool {
        match self {
            Self::Message(_) => false,
            Self::Field(f) => f.optional,
        }
    }

    fn fields(&self) -> Vec<Self> {
        match self {
            Self::Message(m) => m.fields.iter().cloned().map(Self::Field).collect(),
            Self::Field(_) => Vec::new(),
        }
    }

    fn resource_annotation(&self) -> Option<ResourceAnnotation> {
        match self {
            Self::Message(m) => m.resource.clone(),
            Self::Field(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<SchemaFile>),
    One(SchemaFile),
}

impl SchemaFile {
    /// Parses a single unit from JSON.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error on malformed JSON, an empty package, or
    /// unknown structure.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let unit: Self = serde_json::from_str(text).map_err(|e| Error::Descriptor {
            message: format!("invalid schema JSON: {e}"),
            source: Some(Box::new(e)),
        })?;
        unit.validate()?;
        Ok(unit)
    }

    /// Parses either one unit or an array of units from JSON.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error if the text is neither shape.
    pub fn list_from_json_str(text: &str) -> Result<Vec<Self>> {
        let parsed: OneOrMany = serde_json::from_str(text).map_err(|e| Error::Descriptor {
            message: format!("invalid schema JSON: {e}"),
            source: Some(Box::new(e)),
        })?;
        let units = match parsed {
            OneOrMany::Many(units) => units,
            OneOrMany::One(unit) => vec![unit],
        };
        for unit in &units {
            unit.validate()?;
        }
        Ok(units)
    }

    /// Reads one or many units from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or a descriptor
    /// error if it does not parse.
    pub fn list_from_json_file(path: &Path) -> Result<Vec<Self>> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::list_from_json_str(&text)
    }

    /// Checks that every declared name is a protobuf identifier.
    ///
    /// Names end up inside quoted Python literals, so anything outside
    /// `[A-Za-z_][A-Za-z0-9_]*` is rejected. Input types may be dotted and
    /// carry a leading `.`.
    ///
    /// # Errors
    ///
    /// Returns a descriptor error naming the first invalid name.
    pub fn validate(&self) -> Result<()> {
        let invalid = |what: &str, name: &str| Error::Descriptor {
            message: format!("invalid {what} name '{name}' in package '{}'", self.package),
            source: None,
        };

        for service in &self.services {
            if !is_identifier(&service.name) {
                return Err(invalid("service", &service.name));
            }
            for method in &service.methods {
                if !is_identifier(&method.name) {
                    return Err(invalid("method", &method.name));
                }
                let input = method.input_type.as_str();
                let input = input.strip_prefix('.').unwrap_or(input);
                if !input.split('.').all(is_identifier) {
                    return Err(invalid("input type", &method.input_type));
                }
            }
        }
        for message in &self.messages {
            if !is_identifier(&message.name) {
                return Err(invalid("message", &message.name));
            }
            if let Some(field) = message.fields.iter().find(|f| !is_identifier(&f.name)) {
                return Err(invalid("field", &field.name));
            }
        }
        Ok(())
    }

    fn find_message(&self, type_name: &str) -> Option<&MessageDef> {
        let bare = type_name.trim_start_matches('.');
        let bare = bare
            .strip_prefix(self.package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(bare);
        self.messages.iter().find(|m| m.name == bare)
    }
}

impl SchemaUnit for SchemaFile {
    type Descriptor = SchemaNode;

    fn package(&self) -> &str {
        self.package.as_str()
    }

    fn services(&self) -> Result<Vec<ServiceSchema<SchemaNode>>> {
        self.validate()?;
        self.services
            .iter()
            .map(|service| {
                let methods = service
                    .methods
                    .iter()
                    .map(|method| {
                        let input = self.find_message(&method.input_type).ok_or_else(|| {
                            Error::Descriptor {
                                message: format!(
                                    "method '{}.{}' references unknown input type '{}'",
                                    service.name, method.name, method.input_type
                                ),
                                source: None,
                            }
                        })?;
                        Ok(MethodSchema {
                            name: method.name.clone(),
                            input: input.node(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ServiceSchema {
                    name: service.name.clone(),
                    methods,
                })
            })
            .collect()
    }

    fn messages(&self) -> Vec<SchemaNode> {
        self.messages.iter().map(MessageDef::node).collect()
    }
}
