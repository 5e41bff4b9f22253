#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Generates TypeScript type declarations from the component schemas of an
//! OpenAPI document.
//!
//! ```
//! use oas3_ts_gen::generator::{FormatContext, GeneratorConfig, TypeResolver};
//!
//! let schema = serde_json::from_value(serde_json::json!({
//!   "type": "object",
//!   "required": ["name"],
//!   "properties": { "name": { "type": "string" } }
//! }))
//! .unwrap();
//!
//! let resolver = TypeResolver::new(GeneratorConfig::default());
//! let mut warnings = Vec::new();
//! let declaration = resolver
//!   .resolve_declaration("Person", &schema, FormatContext::root(), &mut warnings)
//!   .unwrap();
//! assert_eq!(declaration, "type Person = {\n\tname: string;\n};");
//! ```

pub mod generator;
pub mod utils;

#[cfg(test)]
mod tests;
