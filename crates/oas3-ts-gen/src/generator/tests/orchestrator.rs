use serde_json::json;

use crate::{
  generator::{GeneratorConfig, IndentStyle, Orchestrator},
  tests::common::create_test_spec,
};

fn parse_spec(spec_json: &str) -> oas3::Spec {
  oas3::from_json(spec_json).expect("failed to parse test spec")
}

#[test]
fn test_orchestrator_empty_spec() {
  let spec = parse_spec(
    r#"{
      "openapi": "3.0.0",
      "info": { "title": "Empty API", "version": "1.0.0" },
      "paths": {}
    }"#,
  );
  let orchestrator = Orchestrator::new(spec, GeneratorConfig::default());

  let metadata = orchestrator.metadata();
  assert_eq!(metadata.title, "Empty API");
  assert_eq!(metadata.version, "1.0.0");
  assert_eq!(orchestrator.schema_count(), 0);

  let output = orchestrator.generate().unwrap();
  assert!(output.code.is_empty());
  assert_eq!(output.stats.types_generated, 0);
  assert!(output.stats.warnings.is_empty());
}

#[test]
fn test_orchestrator_generates_component_schemas() {
  let spec = create_test_spec(json!({
    "Person": {
      "type": "object",
      "required": ["name"],
      "properties": {
        "name": { "type": "string" },
        "age": { "type": "integer" },
        "pets": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } }
      }
    },
    "Pet": {
      "type": "object",
      "required": ["id"],
      "properties": {
        "id": { "type": "integer" },
        "nick-name": { "type": "string" }
      }
    }
  }));
  let orchestrator = Orchestrator::new(spec, GeneratorConfig::default());
  assert_eq!(orchestrator.schema_count(), 2);

  let output = orchestrator.generate().unwrap();
  assert_eq!(
    output.code,
    "type Person = {\n\tage?: number;\n\tname: string;\n\tpets?: Pet[];\n};\n\
     type Pet = {\n\tid: number;\n\tnickName?: string;\n};\n"
  );
  assert_eq!(output.stats.types_generated, 2);
  assert_eq!(output.stats.object_types_generated, 2);
}

#[test]
fn test_orchestrator_respects_indent_config() {
  let spec = create_test_spec(json!({
    "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } }
  }));
  let config = GeneratorConfig::builder().indent(IndentStyle::Spaces(4)).build();

  let output = Orchestrator::new(spec, config).generate().unwrap();
  assert_eq!(output.code, "type Pet = {\n    id?: number;\n};\n");
}

#[test]
fn test_orchestrator_generate_with_header() {
  let spec = parse_spec(
    r#"{
      "openapi": "3.0.0",
      "info": { "title": "Test API", "version": "2.0.0", "description": "A test API" },
      "paths": {},
      "components": { "schemas": { "Id": { "type": "string" } } }
    }"#,
  );
  let orchestrator = Orchestrator::new(spec, GeneratorConfig::default());

  let output = orchestrator.generate_with_header("/path/to/spec.json").unwrap();
  assert_eq!(
    output.code,
    "// AUTO-GENERATED CODE - DO NOT EDIT!\n\
     //\n\
     // Test API\n\
     // Source: /path/to/spec.json\n\
     // Version: 2.0.0\n\
     // Generated by `oas3-ts-gen`\n\
     //\n\
     // A test API\n\
     \n\
     type Id = string;\n"
  );
  assert_eq!(output.stats.types_generated, 1);
}

#[test]
fn test_header_with_multiline_description() {
  let spec = parse_spec(
    r#"{
      "openapi": "3.0.0",
      "info": { "title": "Test API", "version": "1.0.0", "description": "Multi\n\nline" },
      "paths": {}
    }"#,
  );
  let orchestrator = Orchestrator::new(spec, GeneratorConfig::default());

  let code = orchestrator.generate_with_header("spec.yaml").unwrap().code;
  assert!(code.contains("//\n// Multi\n//\n// line\n"));
  assert!(code.ends_with("// line\n\n"));
}

#[test]
fn test_header_without_description() {
  let spec = parse_spec(
    r#"{
      "openapi": "3.0.0",
      "info": { "title": "Bare", "version": "0.1.0" },
      "paths": {}
    }"#,
  );
  let code = Orchestrator::new(spec, GeneratorConfig::default())
    .generate_with_header("bare.json")
    .unwrap()
    .code;

  assert!(code.ends_with("// Generated by `oas3-ts-gen`\n\n"));
}
