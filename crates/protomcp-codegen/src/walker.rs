//! Descriptor walker.
//!
//! Traverses a [`SchemaUnit`] in declaration order:
//! package → services → methods → input fields, and
//! package → messages → fields for resource messages. Each visited field is
//! typed with [`map_type`] exactly once. Nested message types are never
//! expanded: a method contributes its input message's direct fields only.

use crate::descriptor::{Descriptor, SchemaUnit};
use crate::resource::is_resource;
use crate::type_map::{JsonType, map_type};
use protomcp_core::{PackageName, Result};
use tracing::debug;

/// A visited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedField {
    /// Field name
    pub name: String,
    /// Mapped output type
    pub json_type: JsonType,
    /// `true` unless the field carries an explicit optional marker
    pub required: bool,
}

/// A visited method with its input message's direct fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedMethod {
    /// Method name
    pub name: String,
    /// Input fields in declaration order
    pub fields: Vec<WalkedField>,
}

/// A visited service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedService {
    /// Service name
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<WalkedMethod>,
}

/// A message that passed resource classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedResource {
    /// Message name
    pub name: String,
    /// Direct fields in declaration order
    pub fields: Vec<WalkedField>,
    /// Resource name patterns from the annotation
    pub patterns: Vec<String>,
}

/// Everything the walker collected from one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedUnit {
    /// Package identifier
    pub package: PackageName,
    /// Services in declaration order
    pub services: Vec<WalkedService>,
    /// Resource messages in declaration order
    pub resources: Vec<WalkedResource>,
}

/// Walks one schema unit.
///
/// # Errors
///
/// Returns an error if the package identifier is empty or the unit cannot
/// resolve a method's input type.
pub fn walk<S: SchemaUnit>(unit: &S) -> Result<WalkedUnit> {
    let package = PackageName::new(unit.package())?;

    let services = unit
        .services()?
        .into_iter()
        .map(|service| {
            let methods: Vec<WalkedMethod> = service
                .methods
                .into_iter()
                .map(|method| WalkedMethod {
                    fields: walk_fields(&method.input),
                    name: method.name,
                })
                .collect();
            debug!(service = %service.name, methods = methods.len(), "walked service");
            WalkedService {
                name: service.name,
                methods,
            }
        })
        .collect();

    let resources = unit
        .messages()
        .iter()
        .filter(|message| {
            let keep = is_resource(*message);
            debug!(name = message.name(), resource = keep, "classified message");
            keep
        })
        .map(|message| WalkedResource {
            name: message.name().to_string(),
            fields: walk_fields(message),
            patterns: message
                .resource_annotation()
                .map(|annotation| annotation.patterns)
                .unwrap_or_default(),
        })
        .collect();

    Ok(WalkedUnit {
        package,
        services,
        resources,
    })
}

/// Visits the direct fields of `message` once each.
fn walk_fields<D: Descriptor>(message: &D) -> Vec<WalkedField> {
    message
        .fields()
        .iter()
        .map(|field| WalkedField {
            name: field.name().to_string(),
            json_type: map_type(field.kind()),
            required: !field.is_optional(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaFile;
    use serde_json::json;

    fn unit(value: serde_json::Value) -> SchemaFile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_walk_preserves_declaration_order() {
        let walked = walk(&unit(json!({
            "package": "acme.v1",
            "services": [
                { "name": "Zeta", "methods": [
                    { "name": "Second", "input_type": "Req" },
                    { "name": "First", "input_type": "Req" }
                ]},
                { "name": "Alpha", "methods": [] }
            ],
            "messages": [{
                "name": "Req",
                "fields": [
                    { "name": "z", "kind": "int32" },
                    { "name": "a", "kind": "bool" },
                    { "name": "m", "kind": "string" }
                ]
            }]
        })))
        .unwrap();

        let services: Vec<_> = walked.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(services, ["Zeta", "Alpha"]);

        let methods: Vec<_> = walked.services[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(methods, ["Second", "First"]);

        let fields: Vec<_> = walked.services[0].methods[0]
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.json_type))
            .collect();
        assert_eq!(
            fields,
            [
                ("z", JsonType::Number),
                ("a", JsonType::Boolean),
                ("m", JsonType::String)
            ]
        );
    }

    #[test]
    fn test_service_without_methods_is_kept() {
        let walked = walk(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "Idle" }]
        })))
        .unwrap();
        assert_eq!(walked.services.len(), 1);
        assert!(walked.services[0].methods.is_empty());
    }

    #[test]
    fn test_empty_input_message() {
        let walked = walk(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "S", "methods": [{ "name": "Ping", "input_type": "Empty" }] }],
            "messages": [{ "name": "Empty" }]
        })))
        .unwrap();
        assert!(walked.services[0].methods[0].fields.is_empty());
    }

    #[test]
    fn test_optional_marker_controls_required() {
        let walked = walk(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "S", "methods": [{ "name": "M", "input_type": "Req" }] }],
            "messages": [{
                "name": "Req",
                "fields": [
                    { "name": "id", "kind": "string" },
                    { "name": "note", "kind": "string", "optional": true }
                ]
            }]
        })))
        .unwrap();
        let fields = &walked.services[0].methods[0].fields;
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[test]
    fn test_nested_messages_are_not_expanded() {
        let walked = walk(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "S", "methods": [{ "name": "M", "input_type": "Outer" }] }],
            "messages": [
                { "name": "Outer", "fields": [{ "name": "inner", "kind": "message" }] },
                { "name": "Inner", "fields": [{ "name": "deep", "kind": "int64" }] }
            ]
        })))
        .unwrap();
        let fields = &walked.services[0].methods[0].fields;
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "inner");
        assert_eq!(fields[0].json_type, JsonType::String);
    }

    #[test]
    fn test_only_annotated_messages_become_resources() {
        let walked = walk(&unit(json!({
            "package": "example.v1",
            "messages": [
                { "name": "User", "resource": { "type": "example.io/User", "pattern": ["users/{user}"] },
                  "fields": [{ "name": "id", "kind": "string" }] },
                { "name": "CreateUserRequest", "fields": [{ "name": "name", "kind": "string" }] },
                { "name": "Group", "resource": {} }
            ]
        })))
        .unwrap();
        let names: Vec<_> = walked.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["User", "Group"]);
        assert_eq!(walked.resources[0].fields[0].name, "id");
        assert_eq!(walked.resources[0].patterns, ["users/{user}"]);
        assert!(walked.resources[1].fields.is_empty());
        assert!(walked.resources[1].patterns.is_empty());
    }
}
