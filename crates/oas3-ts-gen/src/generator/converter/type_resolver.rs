use oas3::spec::{ObjectOrReference, ObjectSchema};

use crate::{
  generator::{
    GeneratorConfig,
    ast::{FormatContext, ResolvedType},
    codegen::{BOOLEAN_TYPE, DeclarationRenderer, EMPTY_OBJECT_TYPE, NUMBER_TYPE, STRING_TYPE, UNKNOWN_TYPE},
    errors::{ConversionError, ConversionResult},
    metrics::GenerationWarning,
    naming::normalize_type_name,
  },
  utils::{SchemaExt, SchemaKind, ref_type_name},
};

/// Resolves OpenAPI schemas into TypeScript type expressions.
///
/// Handles references, primitives, inline objects and arrays. Objects are
/// expanded recursively with one indent level per nesting level; references are
/// never expanded, which is what lets self-referential schemas terminate.
#[derive(Debug, Clone)]
pub struct TypeResolver {
  config: GeneratorConfig,
  renderer: DeclarationRenderer,
}

impl TypeResolver {
  pub fn new(config: GeneratorConfig) -> Self {
    Self {
      config,
      renderer: DeclarationRenderer::new(),
    }
  }

  pub fn config(&self) -> &GeneratorConfig {
    &self.config
  }

  /// Resolves `schema` as it appears under `name`.
  ///
  /// Properties of nested objects that cannot be resolved are left out of the
  /// type expression and reported through `warnings`.
  ///
  /// # Errors
  ///
  /// Returns [`ConversionError::DepthLimitExceeded`] if `ctx.depth` is deeper
  /// than the configured maximum.
  pub fn resolve(
    &self,
    name: &str,
    schema: &ObjectOrReference<ObjectSchema>,
    ctx: FormatContext,
    warnings: &mut Vec<GenerationWarning>,
  ) -> ConversionResult<ResolvedType> {
    self.resolve_at_path(name, name, schema, ctx, warnings)
  }

  /// Resolves `schema` under `name` and renders it as a single declaration.
  pub fn resolve_declaration(
    &self,
    name: &str,
    schema: &ObjectOrReference<ObjectSchema>,
    ctx: FormatContext,
    warnings: &mut Vec<GenerationWarning>,
  ) -> ConversionResult<String> {
    let resolved = self.resolve(name, schema, ctx, warnings)?;
    self.renderer.render(&resolved)
  }

  fn resolve_at_path(
    &self,
    name: &str,
    path: &str,
    schema: &ObjectOrReference<ObjectSchema>,
    ctx: FormatContext,
    warnings: &mut Vec<GenerationWarning>,
  ) -> ConversionResult<ResolvedType> {
    if ctx.depth > self.config.max_depth {
      return Err(ConversionError::DepthLimitExceeded {
        path: path.to_string(),
        max_depth: self.config.max_depth,
      });
    }

    let type_expr = self.type_expression(schema, ctx, path, warnings);

    Ok(
      ResolvedType::builder()
        .name(normalize_type_name(name))
        .type_expr(type_expr)
        .optional(!ctx.required)
        .mode(ctx.mode)
        .build(),
    )
  }

  /// Maps a schema to its type expression. Array items go through here too,
  /// so they support exactly the same shapes as properties.
  fn type_expression(
    &self,
    schema: &ObjectOrReference<ObjectSchema>,
    ctx: FormatContext,
    path: &str,
    warnings: &mut Vec<GenerationWarning>,
  ) -> String {
    let schema = match schema {
      ObjectOrReference::Ref { ref_path, .. } => return ref_type_name(ref_path).to_string(),
      ObjectOrReference::Object(schema) => schema,
    };

    match schema.kind() {
      SchemaKind::String => STRING_TYPE.to_string(),
      SchemaKind::Integer => NUMBER_TYPE.to_string(),
      SchemaKind::Boolean => BOOLEAN_TYPE.to_string(),
      SchemaKind::Object => self.object_expression(schema, ctx, path, warnings),
      SchemaKind::Array => self.array_expression(schema, ctx, path, warnings),
      SchemaKind::Reference | SchemaKind::Unknown => UNKNOWN_TYPE.to_string(),
    }
  }

  /// Builds an inline object literal.
  ///
  /// Members sit one indent level below `ctx.depth`; the closing brace sits at
  /// `ctx.depth`. Properties come out in name order.
  fn object_expression(
    &self,
    schema: &ObjectSchema,
    ctx: FormatContext,
    path: &str,
    warnings: &mut Vec<GenerationWarning>,
  ) -> String {
    let member_indent = self.config.indent.indent(ctx.depth + 1);
    let mut members = Vec::with_capacity(schema.properties.len());

    for (prop_name, prop_schema) in &schema.properties {
      let prop_path = format!("{path}.{prop_name}");
      let member_ctx = ctx.nested(schema.is_required(prop_name));

      let rendered = self
        .resolve_at_path(prop_name, &prop_path, prop_schema, member_ctx, warnings)
        .and_then(|resolved| self.renderer.render(&resolved));

      match rendered {
        Ok(line) => members.push(format!("{member_indent}{line}")),
        Err(error) => warnings.push(GenerationWarning::PropertySkipped {
          path: prop_path,
          error: error.to_string(),
        }),
      }
    }

    if members.is_empty() {
      return EMPTY_OBJECT_TYPE.to_string();
    }

    format!("{{\n{}\n{}}}", members.join("\n"), self.config.indent.indent(ctx.depth))
  }

  /// Builds `<item>[]`. Arrays open no brace scope, so items stay at `ctx.depth`.
  fn array_expression(
    &self,
    schema: &ObjectSchema,
    ctx: FormatContext,
    path: &str,
    warnings: &mut Vec<GenerationWarning>,
  ) -> String {
    let item_expr = match schema.array_items() {
      Some(items) => self.type_expression(items, ctx, &format!("{path}[]"), warnings),
      None => UNKNOWN_TYPE.to_string(),
    };
    format!("{item_expr}[]")
  }
}
