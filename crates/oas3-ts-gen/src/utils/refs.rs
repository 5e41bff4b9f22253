use oas3::spec::{ObjectOrReference, ObjectSchema};

/// Returns the type name a `$ref` path points at.
///
/// The name is the final `/`-separated segment of the path, so
/// `#/components/schemas/User` yields `User`. The referenced schema is never
/// looked up: external documents and unusual pointer prefixes resolve the same
/// way, which keeps self-referential schemas from recursing.
pub fn ref_type_name(ref_path: &str) -> &str {
  ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Extracts the referenced type name from an [`ObjectOrReference`] variant.
///
/// Returns [`None`] for inline schemas ([`ObjectOrReference::Object`]).
pub fn extract_ref_type_name(obj_ref: &ObjectOrReference<ObjectSchema>) -> Option<&str> {
  match obj_ref {
    ObjectOrReference::Ref { ref_path, .. } => Some(ref_type_name(ref_path)),
    ObjectOrReference::Object(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ref_type_name() {
    let cases = [
      ("#/components/schemas/User", "User"),
      ("#/components/schemas/user-profile", "user-profile"),
      ("#/definitions/Pet", "Pet"),
      ("other.yaml#/components/schemas/Order", "Order"),
      ("User", "User"),
      ("#/components/schemas/", ""),
    ];
    for (input, expected) in cases {
      assert_eq!(ref_type_name(input), expected, "failed for input {input:?}");
    }
  }

  #[test]
  fn test_extract_ref_type_name_from_ref() {
    let obj_ref = ObjectOrReference::Ref {
      ref_path: "#/components/schemas/Owner".to_string(),
      summary: None,
      description: None,
    };
    assert_eq!(extract_ref_type_name(&obj_ref), Some("Owner"));
  }

  #[test]
  fn test_extract_ref_type_name_from_inline_object() {
    let obj_ref = ObjectOrReference::Object(ObjectSchema::default());
    assert_eq!(extract_ref_type_name(&obj_ref), None);
  }
}
