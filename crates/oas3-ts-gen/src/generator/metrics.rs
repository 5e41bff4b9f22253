use strum::Display;

use crate::utils::SchemaKind;

/// Counts and diagnostics collected while emitting a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub object_types_generated: usize,
  pub array_types_generated: usize,
  pub primitive_types_generated: usize,
  pub reference_aliases_generated: usize,
  pub unknown_types_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_declaration(&mut self, kind: SchemaKind) {
    self.types_generated += 1;
    match kind {
      SchemaKind::Object => self.object_types_generated += 1,
      SchemaKind::Array => self.array_types_generated += 1,
      SchemaKind::String | SchemaKind::Integer | SchemaKind::Boolean => self.primitive_types_generated += 1,
      SchemaKind::Reference => self.reference_aliases_generated += 1,
      SchemaKind::Unknown => self.unknown_types_generated += 1,
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

/// A schema or property that was left out of the generated output.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Failed to convert schema '{schema_name}': {error}")]
  SchemaConversionFailed { schema_name: String, error: String },
  #[strum(to_string = "Skipped property '{path}': {error}")]
  PropertySkipped { path: String, error: String },
}

impl GenerationWarning {
  /// Returns the schema or property path the warning is about.
  pub fn path(&self) -> &str {
    match self {
      Self::SchemaConversionFailed { schema_name, .. } => schema_name,
      Self::PropertySkipped { path, .. } => path,
    }
  }
}
