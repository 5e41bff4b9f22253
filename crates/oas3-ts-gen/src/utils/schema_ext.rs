use oas3::spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet};
use strum::Display;

/// The shapes a schema node can take as far as type generation is concerned.
///
/// Schemas with a missing type, a `number`/`null` type, or a multi-type set
/// are all [`SchemaKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SchemaKind {
  Reference,
  String,
  Integer,
  Boolean,
  Object,
  Array,
  Unknown,
}

impl SchemaKind {
  /// Classifies a schema or reference. A `$ref` always wins over any sibling fields.
  pub fn of(obj_ref: &ObjectOrReference<ObjectSchema>) -> Self {
    match obj_ref {
      ObjectOrReference::Ref { .. } => Self::Reference,
      ObjectOrReference::Object(schema) => schema.kind(),
    }
  }
}

/// Extension methods for `ObjectSchema` to query its shape conveniently.
pub trait SchemaExt {
  /// Returns the single `SchemaType` if exactly one is defined, None otherwise.
  fn single_type(&self) -> Option<SchemaType>;

  /// Classifies the schema by its declared type.
  fn kind(&self) -> SchemaKind;

  /// Returns true if `property` is listed in the schema's `required` array.
  fn is_required(&self, property: &str) -> bool;

  /// Returns the array item schema.
  /// Returns None if: no items, or items is a boolean schema.
  fn array_items(&self) -> Option<&ObjectOrReference<ObjectSchema>>;
}

impl SchemaExt for ObjectSchema {
  fn single_type(&self) -> Option<SchemaType> {
    match &self.schema_type {
      Some(SchemaTypeSet::Single(t)) => Some(*t),
      _ => None,
    }
  }

  fn kind(&self) -> SchemaKind {
    match self.single_type() {
      Some(SchemaType::String) => SchemaKind::String,
      Some(SchemaType::Integer) => SchemaKind::Integer,
      Some(SchemaType::Boolean) => SchemaKind::Boolean,
      Some(SchemaType::Object) => SchemaKind::Object,
      Some(SchemaType::Array) => SchemaKind::Array,
      _ => SchemaKind::Unknown,
    }
  }

  fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }

  fn array_items(&self) -> Option<&ObjectOrReference<ObjectSchema>> {
    match self.items.as_deref()? {
      Schema::Object(items) => Some(items.as_ref()),
      Schema::Boolean(_) => None,
    }
  }
}
