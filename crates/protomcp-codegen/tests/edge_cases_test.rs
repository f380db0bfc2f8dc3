//! Edge case tests for protomcp-codegen.
//!
//! - Packages without services or messages
//! - Services without methods
//! - Inputs without fields
//! - Nested message fields
//! - Template and input failures

use protomcp_codegen::schema::SchemaFile;
use protomcp_codegen::{Generator, TemplateEngine};
use serde_json::json;

fn unit(value: serde_json::Value) -> SchemaFile {
    serde_json::from_value(value).unwrap()
}

fn tool_count(content: &str) -> usize {
    content.matches("        Tool(").count()
}

#[test]
fn test_empty_package_still_renders_server() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({ "package": "empty.v1" })))
        .unwrap();

    assert_eq!(file.path, "empty/v1/empty_mcp.py");
    assert!(file.content.contains("async def list_tools()"));
    assert!(file.content.contains("async def list_resources()"));
    assert!(file.content.contains("async def read_resource(uri: AnyUrl)"));
    assert_eq!(tool_count(&file.content), 0);
}

#[test]
fn test_service_without_methods() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "Idle" }]
        })))
        .unwrap();

    assert_eq!(tool_count(&file.content), 0);
    assert!(!file.content.contains("Idle"));
}

#[test]
fn test_input_without_fields() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "Health", "methods": [{ "name": "Ping", "input_type": "Empty" }] }],
            "messages": [{ "name": "Empty" }]
        })))
        .unwrap();

    assert_eq!(tool_count(&file.content), 1);
    assert!(file.content.contains("'required': []"));
}

#[test]
fn test_nested_message_field_is_a_string() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "Orders", "methods": [{ "name": "Place", "input_type": "PlaceRequest" }] }],
            "messages": [
                { "name": "PlaceRequest", "fields": [
                    { "name": "address", "kind": "message" },
                    { "name": "express", "kind": "bool", "optional": true }
                ]},
                { "name": "Address", "fields": [{ "name": "street", "kind": "string" }] }
            ]
        })))
        .unwrap();

    assert!(file.content.contains("'required': ['address',]"));
    assert!(!file.content.contains("'street'"));
    assert!(file.content.contains("'type': 'boolean',"));
}

#[test]
fn test_fully_qualified_input_type() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "S", "methods": [{ "name": "M", "input_type": ".acme.v1.Req" }] }],
            "messages": [{ "name": "Req", "fields": [{ "name": "id", "kind": "int64" }] }]
        })))
        .unwrap();

    assert!(file.content.contains("'required': ['id',]"));
}

#[test]
fn test_unknown_input_type_is_an_error() {
    let err = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "services": [{ "name": "S", "methods": [{ "name": "M", "input_type": "Missing" }] }]
        })))
        .unwrap_err();

    assert!(err.is_descriptor_error());
    assert!(err.to_string().contains("Missing"));
}

#[test]
fn test_empty_package_name_rejected() {
    assert!(SchemaFile::from_json_str(r#"{ "package": "" }"#).is_err());
}

#[test]
fn test_unparsable_template_fails_before_output() {
    let err = TemplateEngine::from_source("{{#each services}}{{name}}").unwrap_err();
    assert!(err.is_template_error());
}

#[test]
fn test_resource_without_fields() {
    let file = Generator::new()
        .unwrap()
        .generate(&unit(json!({
            "package": "acme.v1",
            "messages": [{ "name": "Marker", "resource": { "type": "acme.com/Marker" } }]
        })))
        .unwrap();

    assert!(file.content.contains("uri=AnyUrl('acme.v1://Marker'),"));
    assert!(file.content.contains("'Marker': {"));
}
