use std::io::Write;

use oas3::spec::{ObjectOrReference, ObjectSchema};

use crate::{
  generator::{
    GeneratorConfig,
    ast::FormatContext,
    converter::TypeResolver,
    errors::ConversionResult,
    metrics::{GenerationStats, GenerationWarning},
  },
  utils::SchemaKind,
};

/// Writes one `type Name = ...;` declaration per named schema.
#[derive(Debug, Clone)]
pub struct DocumentEmitter {
  resolver: TypeResolver,
}

impl DocumentEmitter {
  pub fn new(config: GeneratorConfig) -> Self {
    Self {
      resolver: TypeResolver::new(config),
    }
  }

  pub fn resolver(&self) -> &TypeResolver {
    &self.resolver
  }

  /// Emits declarations for `schemas` into `sink`, sorted by schema name.
  ///
  /// A schema that fails to convert is recorded in the returned stats and
  /// skipped; the remaining schemas are still emitted.
  ///
  /// # Errors
  ///
  /// Only fails if writing to `sink` fails.
  pub fn emit<'a, K, I, W>(&self, schemas: I, sink: &mut W) -> ConversionResult<GenerationStats>
  where
    K: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a ObjectOrReference<ObjectSchema>)>,
    W: Write + ?Sized,
  {
    let mut entries: Vec<_> = schemas.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let mut stats = GenerationStats::default();
    for (name, schema) in entries {
      let name = name.as_ref();
      let mut warnings = Vec::new();
      let result = self
        .resolver
        .resolve_declaration(name, schema, FormatContext::root(), &mut warnings);
      stats.record_warnings(warnings);

      match result {
        Ok(declaration) => {
          writeln!(sink, "{declaration}")?;
          stats.record_declaration(SchemaKind::of(schema));
        }
        Err(error) => stats.record_warning(GenerationWarning::SchemaConversionFailed {
          schema_name: name.to_string(),
          error: error.to_string(),
        }),
      }
    }

    sink.flush()?;
    Ok(stats)
  }
}
