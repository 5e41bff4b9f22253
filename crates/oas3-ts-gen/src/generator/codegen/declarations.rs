use std::fmt::Write;

use super::UNKNOWN_TYPE;
use crate::generator::{
  ast::{RenderMode, ResolvedType},
  errors::{ConversionError, ConversionResult},
};

const TYPE_ALIAS_KEYWORD: &str = "type";
const OPTIONAL_MARKER: &str = "?";

/// Renders resolved types as TypeScript declarations.
///
/// All declaration punctuation is assembled here; the type resolver only builds
/// type expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationRenderer;

impl DeclarationRenderer {
  pub const fn new() -> Self {
    Self
  }

  /// Renders one declaration line.
  ///
  /// - `RootAlias`: `type Name = Type;`
  /// - `InlineMember`: `name: Type;`, or `name?: Type;` when optional
  ///
  /// An empty type expression is rendered as `unknown`.
  pub fn render(&self, resolved: &ResolvedType) -> ConversionResult<String> {
    let type_expr = if resolved.type_expr.is_empty() {
      UNKNOWN_TYPE
    } else {
      resolved.type_expr.as_str()
    };

    let mut out = String::with_capacity(resolved.name.len() + type_expr.len() + 8);
    let written = match resolved.mode {
      RenderMode::RootAlias => write!(out, "{TYPE_ALIAS_KEYWORD} {} = {type_expr};", resolved.name),
      RenderMode::InlineMember => {
        let marker = if resolved.optional { OPTIONAL_MARKER } else { "" };
        write!(out, "{}{marker}: {type_expr};", resolved.name)
      }
    };

    written.map_err(|source| ConversionError::Render {
      name: resolved.name.clone(),
      source,
    })?;
    Ok(out)
  }
}
