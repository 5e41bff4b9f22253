use oas3::spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet, Spec};
use serde_json::{Value, json};

use crate::generator::{FormatContext, GenerationWarning, GeneratorConfig, TypeResolver};

pub(crate) fn typed(schema_type: SchemaType) -> ObjectSchema {
  ObjectSchema {
    schema_type: Some(SchemaTypeSet::Single(schema_type)),
    ..Default::default()
  }
}

pub(crate) fn inline(schema: ObjectSchema) -> ObjectOrReference<ObjectSchema> {
  ObjectOrReference::Object(schema)
}

pub(crate) fn primitive(schema_type: SchemaType) -> ObjectOrReference<ObjectSchema> {
  inline(typed(schema_type))
}

pub(crate) fn reference(ref_path: &str) -> ObjectOrReference<ObjectSchema> {
  ObjectOrReference::Ref {
    ref_path: ref_path.to_string(),
    summary: None,
    description: None,
  }
}

pub(crate) fn object(
  properties: impl IntoIterator<Item = (&'static str, ObjectOrReference<ObjectSchema>)>,
  required: &[&str],
) -> ObjectOrReference<ObjectSchema> {
  inline(ObjectSchema {
    properties: properties
      .into_iter()
      .map(|(name, schema)| (name.to_string(), schema))
      .collect(),
    required: required.iter().map(|name| (*name).to_string()).collect(),
    ..typed(SchemaType::Object)
  })
}

pub(crate) fn array_of(items: ObjectOrReference<ObjectSchema>) -> ObjectOrReference<ObjectSchema> {
  inline(ObjectSchema {
    items: Some(Box::new(Schema::Object(Box::new(items)))),
    ..typed(SchemaType::Array)
  })
}

/// Parses a schema written as OpenAPI JSON.
pub(crate) fn schema_from_json(value: Value) -> ObjectOrReference<ObjectSchema> {
  serde_json::from_value(value).expect("failed to parse test schema")
}

pub(crate) fn create_test_spec(schemas: Value) -> Spec {
  let spec_json = json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  });
  serde_json::from_value(spec_json).expect("failed to parse test spec")
}

pub(crate) fn default_resolver() -> TypeResolver {
  TypeResolver::new(GeneratorConfig::default())
}

/// Resolves and renders `schema`, panicking on failure, and returns the warnings alongside.
pub(crate) fn render_with_warnings(
  resolver: &TypeResolver,
  name: &str,
  schema: &ObjectOrReference<ObjectSchema>,
  ctx: FormatContext,
) -> (String, Vec<GenerationWarning>) {
  let mut warnings = Vec::new();
  let declaration = resolver
    .resolve_declaration(name, schema, ctx, &mut warnings)
    .expect("resolution should succeed");
  (declaration, warnings)
}

pub(crate) fn render_alias(name: &str, schema: &ObjectOrReference<ObjectSchema>) -> String {
  let (declaration, warnings) = render_with_warnings(&default_resolver(), name, schema, FormatContext::root());
  assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
  declaration
}

pub(crate) fn render_member(name: &str, schema: &ObjectOrReference<ObjectSchema>, required: bool) -> String {
  let (declaration, warnings) = render_with_warnings(
    &default_resolver(),
    name,
    schema,
    FormatContext::member(1, required),
  );
  assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
  declaration
}
