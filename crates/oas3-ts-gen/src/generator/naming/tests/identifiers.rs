use crate::generator::naming::identifiers::normalize_type_name;

#[test]
fn test_type_names() {
  let cases = [
    // Unchanged
    ("User", "User"),
    ("age", "age"),
    ("isAlive", "isAlive"),
    ("user_profile", "user_profile"),
    ("", ""),
    // Leading digit
    ("1stPlace", "_1stPlace"),
    ("123", "_123"),
    ("2fa_enabled", "_2fa_enabled"),
    // Hyphenated names become lowerCamelCase
    ("user-profile", "userProfile"),
    ("User-Profile", "userProfile"),
    ("x-rate-limit", "xRateLimit"),
    ("content-MD5", "contentMD5"),
    ("trailing-", "trailing"),
    ("double--dash", "doubleDash"),
    ("-leading", "Leading"),
    // Both rules
    ("1st-place", "_1stPlace"),
  ];
  for (input, expected) in cases {
    assert_eq!(normalize_type_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_other_punctuation_is_not_sanitized() {
  let cases = [
    ("user profile", "user profile"),
    ("pets/{id}", "pets/{id}"),
    ("a.b", "a.b"),
    ("with space-and-dash", "with spaceAndDash"),
  ];
  for (input, expected) in cases {
    assert_eq!(normalize_type_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_normalization_is_idempotent_for_clean_names() {
  for name in ["userProfile", "_1stPlace", "Pet"] {
    assert_eq!(normalize_type_name(&normalize_type_name(name)), normalize_type_name(name));
  }
}
