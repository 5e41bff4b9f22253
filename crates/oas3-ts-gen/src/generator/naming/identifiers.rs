/// Converts a schema or property name into the identifier used in generated TypeScript.
///
/// # Rules:
/// 1. If the name starts with an ASCII digit, it is prefixed with `_`.
/// 2. If the name contains `-`, it is converted to lowerCamelCase: the first
///    segment is lowercased and each following segment gets an uppercase first letter.
/// 3. Everything else is left untouched. Spaces, slashes and other punctuation
///    pass through verbatim so output for existing schemas stays stable.
pub fn normalize_type_name(raw: &str) -> String {
  let name = if raw.starts_with(|c: char| c.is_ascii_digit()) {
    format!("_{raw}")
  } else {
    raw.to_string()
  };

  if !name.contains('-') {
    return name;
  }

  to_lower_camel_case(&name)
}

fn to_lower_camel_case(name: &str) -> String {
  let mut segments = name.split('-');
  let mut ident = segments.next().unwrap_or_default().to_lowercase();
  for segment in segments {
    ident.push_str(&capitalize(segment));
  }
  ident
}

fn capitalize(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
