//! Intermediate representation handed to the template.
//!
//! [`build`] turns walker output into a [`PackageUnit`] without reordering
//! anything. Descriptions are derived from names so the output never
//! depends on comments or other free text in the schema.
//!
//! The serialized shape is the template contract:
//!
//! ```text
//! package
//! services[].name
//! services[].methods[].{name, description, input_fields, required_fields}
//! input_fields[].{name, type, description, required}
//! messages[].{name, description, fields, patterns}
//! ```

use crate::type_map::JsonType;
use crate::walker::{WalkedField, WalkedUnit};
use protomcp_core::PackageName;
use serde::Serialize;
use tracing::warn;

/// One package, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageUnit {
    /// Dotted package identifier
    pub package: PackageName,
    /// Services in declaration order
    pub services: Vec<Service>,
    /// Resource messages in declaration order
    pub messages: Vec<ResourceMessage>,
}

/// A service and its tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Service name
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<Method>,
}

/// A method exposed as one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    /// Tool name
    pub name: String,
    /// `"{method} method from {service} service"`
    pub description: String,
    /// Input schema properties in declaration order
    pub input_fields: Vec<Field>,
    /// Names of required input fields, in declaration order
    pub required_fields: Vec<String>,
}

/// One input schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Property name
    pub name: String,
    /// JSON Schema type
    #[serde(rename = "type")]
    pub json_type: JsonType,
    /// `"Field {name}"`
    pub description: String,
    /// Whether the property is required
    pub required: bool,
}

/// A message listed as an MCP resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceMessage {
    /// Message name
    pub name: String,
    /// `"Resource type {name}"`
    pub description: String,
    /// Direct fields in declaration order
    pub fields: Vec<Field>,
    /// Resource name patterns, e.g. `invoices/{invoice}`
    pub patterns: Vec<String>,
}

impl PackageUnit {
    /// Total number of tools across all services.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }
}

/// Assembles the IR for one walked unit.
#[must_use]
pub fn build(walked: WalkedUnit) -> PackageUnit {
    let services = walked
        .services
        .into_iter()
        .map(|service| {
            let methods = service
                .methods
                .into_iter()
                .map(|method| {
                    let required_fields = method
                        .fields
                        .iter()
                        .filter(|f| f.required)
                        .map(|f| f.name.clone())
                        .collect();
                    Method {
                        description: method_description(&method.name, &service.name),
                        input_fields: method.fields.into_iter().map(field).collect(),
                        required_fields,
                        name: method.name,
                    }
                })
                .collect();
            Service {
                name: service.name,
                methods,
            }
        })
        .collect();

    let messages = walked
        .resources
        .into_iter()
        .map(|resource| ResourceMessage {
            description: format!("Resource type {}", resource.name),
            fields: resource.fields.into_iter().map(field).collect(),
            patterns: quotable_patterns(&resource.name, resource.patterns),
            name: resource.name,
        })
        .collect();

    PackageUnit {
        package: walked.package,
        services,
        messages,
    }
}

fn method_description(method: &str, service: &str) -> String {
    format!("{method} method from {service} service")
}

/// Patterns are emitted inside single-quoted Python literals, so one that
/// could close the literal is dropped.
fn quotable_patterns(resource: &str, patterns: Vec<String>) -> Vec<String> {
    patterns
        .into_iter()
        .filter(|pattern| {
            let quotable = !pattern.chars().any(|c| c == '\'' || c == '\\' || c.is_control());
            if !quotable {
                warn!(resource, pattern = %pattern, "skipping unquotable resource pattern");
            }
            quotable
        })
        .collect()
}

fn field(walked: WalkedField) -> Field {
    Field {
        description: format!("Field {}", walked.name),
        name: walked.name,
        json_type: walked.json_type,
        required: walked.required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::{WalkedMethod, WalkedResource, WalkedService};

    fn walked_field(name: &str, json_type: JsonType, required: bool) -> WalkedField {
        WalkedField {
            name: name.to_string(),
            json_type,
            required,
        }
    }

    fn billing() -> WalkedUnit {
        WalkedUnit {
            package: PackageName::new("acme.billing.v1").unwrap(),
            services: vec![WalkedService {
                name: "Billing".to_string(),
                methods: vec![WalkedMethod {
                    name: "CreateInvoice".to_string(),
                    fields: vec![
                        walked_field("customer_id", JsonType::String, true),
                        walked_field("amount", JsonType::Number, true),
                        walked_field("note", JsonType::String, false),
                    ],
                }],
            }],
            resources: vec![WalkedResource {
                name: "Invoice".to_string(),
                fields: vec![walked_field("id", JsonType::String, true)],
                patterns: vec!["invoices/{invoice}".to_string()],
            }],
        }
    }

    #[test]
    fn test_method_description_and_required_fields() {
        let unit = build(billing());
        let method = &unit.services[0].methods[0];

        assert_eq!(method.description, "CreateInvoice method from Billing service");
        assert_eq!(method.required_fields, ["customer_id", "amount"]);
        assert_eq!(method.input_fields.len(), 3);
        assert_eq!(method.input_fields[2].description, "Field note");
    }

    #[test]
    fn test_required_fields_subset_of_inputs() {
        let unit = build(billing());
        for method in unit.services.iter().flat_map(|s| &s.methods) {
            for required in &method.required_fields {
                assert!(method.input_fields.iter().any(|f| &f.name == required));
            }
        }
    }

    #[test]
    fn test_resource_description() {
        let unit = build(billing());
        assert_eq!(unit.messages[0].description, "Resource type Invoice");
        assert_eq!(unit.messages[0].fields[0].name, "id");
        assert_eq!(unit.messages[0].patterns, ["invoices/{invoice}"]);
    }

    #[test]
    fn test_pattern_that_breaks_quoting_is_dropped() {
        let mut walked = billing();
        walked.resources[0].patterns = vec![
            "invoices/{invoice}".to_string(),
            "it's/{x}".to_string(),
            "back\\slash".to_string(),
            "line\nbreak".to_string(),
        ];

        let unit = build(walked);
        assert_eq!(unit.messages[0].patterns, ["invoices/{invoice}"]);
    }

    #[test]
    fn test_tool_count() {
        assert_eq!(build(billing()).tool_count(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(build(billing())).unwrap();
        assert_eq!(value["package"], "acme.billing.v1");
        assert_eq!(
            value["services"][0]["methods"][0]["input_fields"][1]["type"],
            "number"
        );
        assert_eq!(
            value["services"][0]["methods"][0]["required_fields"],
            serde_json::json!(["customer_id", "amount"])
        );
    }
}
