//! Code generation for MCP servers from protobuf schemas.
//!
//! Walks a schema unit (services, methods, messages, fields), builds a
//! template-ready intermediate representation, and renders it through a
//! Handlebars template into a Python MCP server module.
//!
//! # Pipeline
//!
//! ```text
//! SchemaUnit ──> walker ──> ir::build ──> TemplateEngine ──> GeneratedFile
//!                 │  │                                            ▲
//!          type_map  resource                             path::derive_path
//! ```
//!
//! # Examples
//!
//! ```
//! use protomcp_codegen::Generator;
//! use protomcp_codegen::schema::SchemaFile;
//! use serde_json::json;
//!
//! let unit: SchemaFile = serde_json::from_value(json!({
//!     "package": "acme.billing.v1",
//!     "services": [{
//!         "name": "Billing",
//!         "methods": [{ "name": "CreateInvoice", "input_type": "CreateInvoiceRequest" }]
//!     }],
//!     "messages": [{
//!         "name": "CreateInvoiceRequest",
//!         "fields": [{ "name": "customer_id", "kind": "string" }]
//!     }]
//! })).unwrap();
//!
//! let generator = Generator::new().unwrap();
//! let file = generator.generate(&unit).unwrap();
//! assert_eq!(file.path, "acme/billing/v1/acme_mcp.py");
//! assert!(file.content.contains("name='CreateInvoice'"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod descriptor;
pub mod generator;
pub mod ir;
pub mod path;
pub mod proto;
pub mod resource;
pub mod schema;
pub mod template_engine;
pub mod type_map;
pub mod types;
pub mod walker;

pub use descriptor::{Descriptor, FieldKind, MethodSchema, ResourceAnnotation, SchemaUnit, ServiceSchema};
pub use generator::Generator;
pub use ir::PackageUnit;
pub use template_engine::TemplateEngine;
pub use type_map::{JsonType, map_type};
pub use types::{GeneratedCode, GeneratedFile};
